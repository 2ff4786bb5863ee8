//! Error codes for the backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Player name missing or blank
    InvalidName,
    /// Card not in the submitting player's hand
    CardNotInHand,
    /// The revealing player has already submitted this round
    AlreadySubmitted,
    /// Not every non-judge player has submitted yet
    RevealNotReady,
    /// The black deck is exhausted and the game has ended
    GameOver,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business logic conflicts
    /// Session record kept moving underneath the gateway's retry loop
    SessionContention,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System errors
    /// Session storage load/store failure
    StorageFailure,
    /// Persisted session blob failed to decode
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidName => "INVALID_NAME",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::RevealNotReady => "REVEAL_NOT_READY",
            Self::GameOver => "GAME_OVER",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::SessionContention => "SESSION_CONTENTION",
            Self::Conflict => "CONFLICT",

            Self::StorageFailure => "STORAGE_FAILURE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidName.as_str(), "INVALID_NAME");
        assert_eq!(ErrorCode::CardNotInHand.as_str(), "CARD_NOT_IN_HAND");
        assert_eq!(ErrorCode::AlreadySubmitted.as_str(), "ALREADY_SUBMITTED");
        assert_eq!(ErrorCode::RevealNotReady.as_str(), "REVEAL_NOT_READY");
        assert_eq!(ErrorCode::GameOver.as_str(), "GAME_OVER");
        assert_eq!(ErrorCode::PlayerNotFound.as_str(), "PLAYER_NOT_FOUND");
        assert_eq!(ErrorCode::SessionContention.as_str(), "SESSION_CONTENTION");
        assert_eq!(ErrorCode::StorageFailure.as_str(), "STORAGE_FAILURE");
        assert_eq!(ErrorCode::DataCorruption.as_str(), "DATA_CORRUPTION");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }
}
