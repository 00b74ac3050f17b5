//! Rules engine for four-player Hearts.
//!
//! The [`domain`] layer is pure and synchronous; [`services`] adds a
//! concurrent in-memory registry for hosts that serve many games at once.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

pub use ai::{create_auto_player, AutoPlayer};
pub use config::RulesConfig;
pub use domain::{Card, Game, PlayerId, Rank, Round, RoundSnapshot, ScoreBoard, Suit};
pub use errors::DomainError;
pub use services::RoundRegistry;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    hearts_test_support::test_logging::init();
}
