//! Per-player views of session state — what a given player is allowed to see.
//!
//! Other players' hands and pending submissions are never exposed; opponents
//! are reduced to name, score, and a has-played flag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, CardId, NO_CARD};
use crate::domain::session::{PlayerId, SessionState};

/// Public facts about one seat at the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub has_played: bool,
    pub score: u32,
}

/// Snapshot returned to a player after every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub black: Card,
    pub hand: Vec<Card>,
    /// Id of this player's pending submission, or [`NO_CARD`].
    pub selected: CardId,
    pub players: Vec<PlayerPublic>,
    pub game_over: bool,
}

/// The judge's reveal: every pending submission resolved to a full card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealedSubmissions {
    pub submissions: BTreeMap<PlayerId, Card>,
}

/// Build the state snapshot visible to `player_id`.
///
/// Callers must have validated the player id; an unknown id yields a view
/// with an empty hand rather than a panic.
pub fn player_view(state: &SessionState, player_id: &str) -> PlayerView {
    let hand = state
        .players
        .get(player_id)
        .map(|p| p.hand.cards().to_vec())
        .unwrap_or_default();

    let players = state
        .players
        .values()
        .map(|p| PlayerPublic {
            id: p.id.clone(),
            name: p.name.clone(),
            has_played: state.has_played(&p.id),
            score: state.score(&p.id),
        })
        .collect();

    PlayerView {
        player_id: player_id.to_string(),
        black: state.current_black.clone(),
        hand,
        selected: state
            .submissions
            .get(player_id)
            .copied()
            .unwrap_or(NO_CARD),
        players,
        game_over: state.game_over,
    }
}
