//! Domain-level error type returned by every engine operation.
//!
//! This error type is HTTP- and transport-agnostic. The HTTP layer converts it
//! with `From<DomainError> for AppError`; the websocket layer maps it to a
//! private `error` frame for the acting session only.

use thiserror::Error;

use crate::errors::ErrorCode;

/// Expected, non-fatal refusals of a player action. State is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectKind {
    NotYourTurn,
    EmptySubmission,
    MixedRanks,
    CountMismatch,
    NoLegalBeat,
    CardsNotInHand,
    /// The action needs a round in a different state (e.g. submitting before start).
    PhaseMismatch,
}

/// Caller mistakes on roster/round management. State is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    DuplicateName,
    NotEnoughPlayers,
    TooManyPlayers,
    RoundInProgress,
    InvalidName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundKind {
    Player,
    Room,
}

/// Rule features that exist as names but have no behavior behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    StraightMode,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("rejected {0:?}: {1}")]
    Rejected(RejectKind, String),
    #[error("operation failed {0:?}: {1}")]
    Operation(OperationKind, String),
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    #[error("parse card: {0}")]
    ParseCard(String),
    /// A configuration or programmer error, never a player-facing rejection.
    #[error("unimplemented {0:?}: {1}")]
    Unimplemented(Feature, String),
}

impl DomainError {
    pub fn rejected(kind: RejectKind, detail: impl Into<String>) -> Self {
        Self::Rejected(kind, detail.into())
    }
    pub fn operation(kind: OperationKind, detail: impl Into<String>) -> Self {
        Self::Operation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn parse_card(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }
    pub fn unimplemented(feature: Feature, detail: impl Into<String>) -> Self {
        Self::Unimplemented(feature, detail.into())
    }

    /// The reject kind, if this is a player-facing rejection.
    pub fn reject_kind(&self) -> Option<RejectKind> {
        match self {
            Self::Rejected(kind, _) => Some(*kind),
            _ => None,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Rejected(_, d)
            | Self::Operation(_, d)
            | Self::NotFound(_, d)
            | Self::ParseCard(d)
            | Self::Unimplemented(_, d) => d,
        }
    }

    /// Stable wire code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Rejected(kind, _) => match kind {
                RejectKind::NotYourTurn => ErrorCode::NotYourTurn,
                RejectKind::EmptySubmission => ErrorCode::EmptySubmission,
                RejectKind::MixedRanks => ErrorCode::MixedRanks,
                RejectKind::CountMismatch => ErrorCode::CountMismatch,
                RejectKind::NoLegalBeat => ErrorCode::NoLegalBeat,
                RejectKind::CardsNotInHand => ErrorCode::CardsNotInHand,
                RejectKind::PhaseMismatch => ErrorCode::PhaseMismatch,
            },
            Self::Operation(kind, _) => match kind {
                OperationKind::DuplicateName => ErrorCode::DuplicateName,
                OperationKind::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
                OperationKind::TooManyPlayers => ErrorCode::TooManyPlayers,
                OperationKind::RoundInProgress => ErrorCode::RoundInProgress,
                OperationKind::InvalidName => ErrorCode::InvalidName,
            },
            Self::NotFound(kind, _) => match kind {
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Room => ErrorCode::RoomNotFound,
            },
            Self::ParseCard(_) => ErrorCode::ParseCard,
            Self::Unimplemented(_, _) => ErrorCode::Unimplemented,
        }
    }
}
