//! Hand-built session fixtures for unit tests that need exact deck contents.

use std::collections::BTreeMap;

use crate::domain::cards::{Card, CardId};
use crate::domain::deck::Deck;
use crate::domain::session::{Player, SessionState};

pub(crate) fn white_card(id: CardId) -> Card {
    Card::new(id, format!("white {id}"))
}

pub(crate) fn black_card(id: CardId) -> Card {
    Card::new(id, format!("black {id}"))
}

fn deck_of(cards: Vec<Card>) -> Deck {
    let mut deck = Deck::default();
    deck.add(cards);
    deck
}

/// A session with the given `(id, name, hand-card ids)` players, a known
/// current prompt, and stocked draw piles. No shuffling, so tests can
/// predict every subsequent deal.
pub(crate) fn session_with_players(players: &[(&str, &str, &[CardId])]) -> SessionState {
    let mut registry = BTreeMap::new();
    for (id, name, hand_ids) in players {
        registry.insert(
            id.to_string(),
            Player {
                id: id.to_string(),
                name: name.to_string(),
                hand: deck_of(hand_ids.iter().copied().map(white_card).collect()),
            },
        );
    }

    // draw piles disjoint from any fixture hand
    let white_deck = deck_of((100..110).map(white_card).collect());
    let black_deck = deck_of((1..4).map(black_card).collect());

    SessionState {
        black_deck,
        white_deck,
        players: registry,
        current_black: black_card(0),
        submissions: BTreeMap::new(),
        scores: BTreeMap::new(),
        game_over: false,
    }
}
