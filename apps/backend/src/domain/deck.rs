//! Ordered card pile with draw / discard / shuffle operations.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, CardId};

/// An ordered pile of cards. The front of the pile is the top of the deck.
///
/// Invariant: a deck never holds two cards with the same id. Cards move
/// between piles (draw pile, hand) but exist in one place at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Remove and return the first `min(count, len)` cards in current order.
    /// Returns fewer than `count` cards when the pile runs short; never errors.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    /// Append cards to the bottom of the pile. Returned cards are not
    /// reshuffled in; they surface again only once the pile cycles.
    pub fn add(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Remove the first card with the given id. Silently a no-op when the id
    /// is absent; callers only remove ids they know are present.
    pub fn remove(&mut self, id: CardId) {
        if let Some(pos) = self.cards.iter().position(|c| c.id == id) {
            self.cards.remove(pos);
        }
    }

    /// Replace the pile contents with one card per corpus entry, in corpus
    /// order, with `id` = corpus index.
    pub fn populate(&mut self, corpus: &[String]) {
        self.cards = corpus
            .iter()
            .enumerate()
            .map(|(i, text)| Card::new(i as CardId, text.clone()))
            .collect();
    }

    /// Uniformly random in-place permutation (Fisher-Yates via `rand`).
    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.cards.shuffle(rng);
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn deck_of(ids: &[CardId]) -> Deck {
        let mut deck = Deck::default();
        deck.add(ids.iter().map(|&id| Card::new(id, format!("card {id}"))).collect());
        deck
    }

    fn ids(deck: &Deck) -> Vec<CardId> {
        deck.cards().iter().map(|c| c.id).collect()
    }

    #[test]
    fn deal_takes_from_the_front_in_order() {
        let mut deck = deck_of(&[3, 1, 4, 5, 9]);
        let dealt = deck.deal(2);
        assert_eq!(dealt.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(ids(&deck), vec![4, 5, 9]);
    }

    #[test]
    fn deal_caps_at_remaining_cards() {
        let mut deck = deck_of(&[7, 8]);
        let dealt = deck.deal(10);
        assert_eq!(dealt.len(), 2);
        assert!(deck.is_empty());

        let dealt = deck.deal(1);
        assert!(dealt.is_empty());
    }

    #[test]
    fn add_appends_to_the_bottom() {
        let mut deck = deck_of(&[1, 2]);
        deck.add(vec![Card::new(9, "nine")]);
        assert_eq!(ids(&deck), vec![1, 2, 9]);
    }

    #[test]
    fn remove_drops_first_match_and_ignores_missing_ids() {
        let mut deck = deck_of(&[1, 2, 3]);
        deck.remove(2);
        assert_eq!(ids(&deck), vec![1, 3]);
        deck.remove(42);
        assert_eq!(ids(&deck), vec![1, 3]);
    }

    #[test]
    fn populate_assigns_corpus_indices_as_ids() {
        let corpus = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut deck = Deck::default();
        deck.populate(&corpus);
        assert_eq!(ids(&deck), vec![0, 1, 2]);
        assert_eq!(deck.cards()[1].text, "b");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut deck = deck_of(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let mut before = ids(&deck);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        let mut after = ids(&deck);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_is_deterministic_under_a_fixed_seed() {
        let mut a = deck_of(&[0, 1, 2, 3, 4, 5]);
        let mut b = a.clone();
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        a.shuffle(&mut rng_a);
        b.shuffle(&mut rng_b);
        assert_eq!(a, b);
    }
}
