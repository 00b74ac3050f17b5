//! Automated player trait definition.

use std::fmt;

use crate::domain::player_view::PlayerView;
use crate::domain::rules::PASS_COUNT;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Errors that can occur while an automated player decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Player encountered an internal error
    Internal(String),
    /// Player had no legal option or produced an illegal one
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::validation(ValidationKind::Other("AI_ERROR".into()), err.to_string())
    }
}

/// A seat the host lets the engine drive.
///
/// Implementations only ever see one seat's [`PlayerView`] or hand; the
/// round re-validates whatever they return.
pub trait AutoPlayer: Send + Sync {
    /// Three distinct cards from `hand` to pass.
    fn choose_pass(&self, hand: &[Card]) -> Result<[Card; PASS_COUNT], AiError>;

    /// A card from `view.legal_plays`.
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}
