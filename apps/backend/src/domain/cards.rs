//! Card types shared by decks, hands, and views.

use serde::{Deserialize, Serialize};

/// Card identifier. Ids are indices into the corpus the card was created
/// from, so black and white ids are independent namespaces.
pub type CardId = i32;

/// Sentinel card id meaning "no card" (used by clients to withdraw a
/// submission and in views for "nothing selected").
pub const NO_CARD: CardId = -1;

/// A single prompt or answer card. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
