//! Domain-level error type used across the rules engine.
//!
//! This error type is storage- and transport-agnostic. Hosts map the
//! variants onto their own user-visible messages ("invalid play",
//! "round not ready", ...).

use thiserror::Error;

/// Reasons a submitted play is rejected. The round is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPlayKind {
    CardNotInHand,
    MustFollowSuit,
    HeartsNotBroken,
    PointsOnFirstTrick,
    MustLeadTwoOfClubs,
    OutOfTurn,
    TrickComplete,
}

/// Operations invoked outside the state that allows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotReadyKind {
    NotDealt,
    AlreadyDealt,
    PassingPending,
    PassingClosed,
    TrickInProgress,
    NoActiveTrick,
    RoundIncomplete,
    RoundComplete,
    AlreadyScored,
}

/// Malformed input that never reached the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    InvalidPassSelection,
    InvalidSeat,
    InvalidConfig,
    InvalidSnapshot,
    Other(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid play {kind:?}: {detail}")]
    InvalidPlay {
        kind: InvalidPlayKind,
        detail: String,
    },
    #[error("not ready {kind:?}: {detail}")]
    NotReady { kind: NotReadyKind, detail: String },
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    #[error("validation error {kind:?}: {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
}

impl DomainError {
    pub fn invalid_play(kind: InvalidPlayKind, detail: impl Into<String>) -> Self {
        Self::InvalidPlay {
            kind,
            detail: detail.into(),
        }
    }
    pub fn not_ready(kind: NotReadyKind, detail: impl Into<String>) -> Self {
        Self::NotReady {
            kind,
            detail: detail.into(),
        }
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation(detail.into())
    }
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for hosts.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidPlay { kind, .. } => match kind {
                InvalidPlayKind::CardNotInHand => "CARD_NOT_IN_HAND",
                InvalidPlayKind::MustFollowSuit => "MUST_FOLLOW_SUIT",
                InvalidPlayKind::HeartsNotBroken => "HEARTS_NOT_BROKEN",
                InvalidPlayKind::PointsOnFirstTrick => "POINTS_ON_FIRST_TRICK",
                InvalidPlayKind::MustLeadTwoOfClubs => "MUST_LEAD_TWO_OF_CLUBS",
                InvalidPlayKind::OutOfTurn => "OUT_OF_TURN",
                InvalidPlayKind::TrickComplete => "TRICK_COMPLETE",
            },
            DomainError::NotReady { kind, .. } => match kind {
                NotReadyKind::NotDealt => "NOT_DEALT",
                NotReadyKind::AlreadyDealt => "ALREADY_DEALT",
                NotReadyKind::PassingPending => "PASSING_PENDING",
                NotReadyKind::PassingClosed => "PASSING_CLOSED",
                NotReadyKind::TrickInProgress => "TRICK_IN_PROGRESS",
                NotReadyKind::NoActiveTrick => "NO_ACTIVE_TRICK",
                NotReadyKind::RoundIncomplete => "ROUND_INCOMPLETE",
                NotReadyKind::RoundComplete => "ROUND_COMPLETE",
                NotReadyKind::AlreadyScored => "ALREADY_SCORED",
            },
            DomainError::InvariantViolation(_) => "INVARIANT_VIOLATION",
            DomainError::Validation { kind, .. } => match kind {
                ValidationKind::ParseCard => "PARSE_CARD",
                ValidationKind::InvalidPassSelection => "INVALID_PASS_SELECTION",
                ValidationKind::InvalidSeat => "INVALID_SEAT",
                ValidationKind::InvalidConfig => "INVALID_CONFIG",
                ValidationKind::InvalidSnapshot => "INVALID_SNAPSHOT",
                ValidationKind::Other(_) => "VALIDATION_ERROR",
            },
        }
    }

    pub fn is_invalid_play(&self) -> bool {
        matches!(self, DomainError::InvalidPlay { .. })
    }

    pub fn is_not_ready(&self) -> bool {
        matches!(self, DomainError::NotReady { .. })
    }
}
