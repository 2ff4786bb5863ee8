//! Property tests for deck operations and phase derivation.

mod common;

use backend::domain::{round_phase, Card, CardId, Deck, RoundPhase};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn deck_of(ids: &[CardId]) -> Deck {
    let mut deck = Deck::default();
    deck.add(
        ids.iter()
            .map(|&id| Card::new(id, format!("card {id}")))
            .collect(),
    );
    deck
}

proptest! {
    #[test]
    fn deal_returns_min_count_and_preserves_order(len in 0usize..48, count in 0usize..64) {
        let ids: Vec<CardId> = (0..len as CardId).collect();
        let mut deck = deck_of(&ids);

        let dealt = deck.deal(count);
        let taken = count.min(len);

        prop_assert_eq!(dealt.len(), taken);
        let dealt_ids: Vec<CardId> = dealt.iter().map(|c| c.id).collect();
        prop_assert_eq!(dealt_ids, ids[..taken].to_vec());
        prop_assert_eq!(deck.len(), len - taken);
        let rest: Vec<CardId> = deck.cards().iter().map(|c| c.id).collect();
        prop_assert_eq!(rest, ids[taken..].to_vec());
    }

    #[test]
    fn shuffle_preserves_the_multiset_of_ids(len in 0usize..64, seed in any::<u64>()) {
        let ids: Vec<CardId> = (0..len as CardId).collect();
        let mut deck = deck_of(&ids);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        deck.shuffle(&mut rng);

        let mut after: Vec<CardId> = deck.cards().iter().map(|c| c.id).collect();
        after.sort_unstable();
        prop_assert_eq!(after, ids);
    }

    #[test]
    fn phase_is_revealable_iff_all_but_one_submitted(subs in 0usize..12, players in 0usize..12) {
        let revealable = round_phase(subs, players) == RoundPhase::Revealable;
        prop_assert_eq!(revealable, subs + 1 == players);
    }
}
