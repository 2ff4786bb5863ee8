//! The session aggregate: two draw decks, the player registry, per-round
//! submissions, and cumulative scores. All session invariants live here.

use std::collections::BTreeMap;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, CardId};
use crate::domain::deck::Deck;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Opaque player identifier, generated server-side on join.
pub type PlayerId = String;

/// White cards dealt into a hand when a player joins.
pub const HAND_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Deck,
}

/// One shared game session. This is the persisted aggregate: the gateway
/// serializes the whole struct as the session record.
///
/// `current_black` is always a previously dealt prompt card. A player id
/// appears in `submissions` or `scores` only if it appears in `players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub black_deck: Deck,
    pub white_deck: Deck,
    pub players: BTreeMap<PlayerId, Player>,
    pub current_black: Card,
    pub submissions: BTreeMap<PlayerId, CardId>,
    pub scores: BTreeMap<PlayerId, u32>,
    #[serde(default)]
    pub game_over: bool,
}

impl SessionState {
    /// Build a fresh session from the corpora: both decks repopulated and
    /// shuffled, registry and tallies cleared, one prompt dealt.
    ///
    /// This is the sole way a valid session comes into existence.
    pub fn reset(
        black_corpus: &[String],
        white_corpus: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<Self, DomainError> {
        let mut black_deck = Deck::default();
        let mut white_deck = Deck::default();
        black_deck.populate(black_corpus);
        white_deck.populate(white_corpus);
        black_deck.shuffle(rng);
        white_deck.shuffle(rng);

        let current_black = black_deck.deal(1).into_iter().next().ok_or_else(|| {
            DomainError::infra(InfraErrorKind::DataCorruption, "black card corpus is empty")
        })?;

        Ok(Self {
            black_deck,
            white_deck,
            players: BTreeMap::new(),
            current_black,
            submissions: BTreeMap::new(),
            scores: BTreeMap::new(),
            game_over: false,
        })
    }

    pub fn require_player(&self, player_id: &str) -> Result<&Player, DomainError> {
        self.players
            .get(player_id)
            .ok_or_else(|| DomainError::unknown_player(player_id))
    }

    /// Cumulative win count; players who never won have no stored entry.
    pub fn score(&self, player_id: &str) -> u32 {
        self.scores.get(player_id).copied().unwrap_or(0)
    }

    pub fn has_played(&self, player_id: &str) -> bool {
        self.submissions.contains_key(player_id)
    }

    /// Case-insensitive lookup by display name, for idempotent re-joins.
    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        let wanted = name.to_lowercase();
        self.players
            .values()
            .find(|p| p.name.to_lowercase() == wanted)
    }
}
