//! Domain layer: pure Hearts rules, no I/O.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod game;
pub mod invariants;
pub mod passing;
pub mod player_view;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, card_points, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, deal_hands_with, full_deck};
pub use game::Game;
pub use passing::{pass_direction, PassDirection, PassSelections};
pub use player_view::PlayerView;
pub use round::{PlayCardResult, Round, RoundPhase};
pub use scoring::{RoundResult, ScoreBoard};
pub use seed_derivation::{derive_dealing_seed, derive_player_seed};
pub use snapshot::RoundSnapshot;
pub use state::{PlayerId, Seat};
pub use tricks::{Play, Trick, TrickOutcome, TrickResolution};
