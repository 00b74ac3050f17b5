//! Automated players and the helpers that let them drive a round.
//!
//! - [`AutoPlayer`] trait for seat policies
//! - [`LowestFirst`]: deterministic, sheds low cards
//! - [`RandomPlayer`]: uniform legal choices, seedable

mod lowest;
mod random;
mod trait_def;

pub use lowest::LowestFirst;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AutoPlayer};
use tracing::debug;

use crate::domain::passing::PassSelections;
use crate::domain::round::Round;
use crate::domain::rules::{PASS_COUNT, PLAYERS};
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

/// Create an automated player by policy name.
///
/// - "lowest": [`LowestFirst`]
/// - "random": [`RandomPlayer`], seeded when `seed` is given
///
/// Returns `None` if the name is unrecognized.
pub fn create_auto_player(name: &str, seed: Option<u64>) -> Option<Box<dyn AutoPlayer>> {
    match name {
        LowestFirst::NAME => Some(Box::new(LowestFirst)),
        RandomPlayer::NAME => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}

/// Ask every seat for its pass selection.
pub fn collect_pass_selections(
    round: &Round,
    players: &[&dyn AutoPlayer; PLAYERS],
) -> Result<PassSelections, DomainError> {
    let mut selections = [[crate::domain::Card::TWO_OF_CLUBS; PASS_COUNT]; PLAYERS];
    for (seat, player) in players.iter().enumerate() {
        let hand = round.hand(seat as PlayerId)?;
        selections[seat] = player.choose_pass(hand)?;
    }
    Ok(selections)
}

/// Play a dealt round to completion with automated seats.
///
/// Passes if the round calls for it, then creates and fills tricks until
/// the round is over. Does not score the round.
pub fn play_out_round(
    round: &mut Round,
    players: &[&dyn AutoPlayer; PLAYERS],
) -> Result<(), DomainError> {
    if round.passing_time() {
        let selections = collect_pass_selections(round, players)?;
        round.pass_cards(&selections)?;
    }

    while !round.is_over() {
        if round.is_ready_for_new_trick() {
            round.create_trick()?;
        }
        let seat = round
            .turn()
            .ok_or_else(|| DomainError::invariant("Open trick has no seat to act"))?;
        let view = round.player_view(seat)?;
        let card = players[seat as usize].choose_play(&view)?;
        debug!(round = round.position(), seat, %card, "Auto play");
        round.play_card(seat, card)?;
    }
    Ok(())
}
