//! Error codes for the Daifugo backend.
//!
//! Every error that leaves the process (HTTP problem details or a websocket
//! `error` frame) carries one of these codes. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

use serde::{Serialize, Serializer};

/// Centralized error codes, rendered as SCREAMING_SNAKE_CASE on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Play rejections
    /// Acting player does not hold the turn
    NotYourTurn,
    /// No cards selected
    EmptySubmission,
    /// Non-Joker cards of different ranks in one submission
    MixedRanks,
    /// Submission size differs from the group on the table
    CountMismatch,
    /// Submission does not beat the group on the table
    NoLegalBeat,
    /// Submitted cards are not all in the player's hand
    CardsNotInHand,
    /// Action not allowed in the current round state
    PhaseMismatch,

    // Roster and round management
    /// A player with this name is already seated
    DuplicateName,
    /// Fewer than two players seated
    NotEnoughPlayers,
    /// More players seated than the role table supports
    TooManyPlayers,
    /// Roster cannot change while cards are being played
    RoundInProgress,
    /// Empty or oversized display name
    InvalidName,

    // Request validation
    /// Card token could not be parsed
    ParseCard,
    /// Unknown house rule name
    InvalidRule,
    /// Malformed request or message
    BadRequest,
    /// Unsupported websocket protocol version
    BadProtocol,

    // Not found
    RoomNotFound,
    PlayerNotFound,

    // System
    /// Rule feature without an implementation was activated
    Unimplemented,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::EmptySubmission => "EMPTY_SUBMISSION",
            Self::MixedRanks => "MIXED_RANKS",
            Self::CountMismatch => "COUNT_MISMATCH",
            Self::NoLegalBeat => "NO_LEGAL_BEAT",
            Self::CardsNotInHand => "CARDS_NOT_IN_HAND",
            Self::PhaseMismatch => "PHASE_MISMATCH",

            Self::DuplicateName => "DUPLICATE_NAME",
            Self::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::RoundInProgress => "ROUND_IN_PROGRESS",
            Self::InvalidName => "INVALID_NAME",

            Self::ParseCard => "PARSE_CARD",
            Self::InvalidRule => "INVALID_RULE",
            Self::BadRequest => "BAD_REQUEST",
            Self::BadProtocol => "BAD_PROTOCOL",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::Unimplemented => "UNIMPLEMENTED",
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

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
