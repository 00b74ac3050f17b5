use serde::{Deserialize, Serialize};

use crate::domain::rules::{MOON_SHOT_POINTS, PLAYERS, ROUND_POINTS};
use crate::domain::state::PlayerId;
use crate::domain::tricks::TrickOutcome;
use crate::errors::domain::DomainError;

/// Sum each trick's score into its winner's round score.
///
/// Every trick must be over and the total must be exactly 26.
pub fn round_scores<T: TrickOutcome>(tricks: &[T]) -> Result<[u8; PLAYERS], DomainError> {
    let mut scores = [0u8; PLAYERS];
    for (idx, trick) in tricks.iter().enumerate() {
        let winner = trick
            .trick_winner()
            .filter(|_| trick.is_over())
            .ok_or_else(|| DomainError::invariant(format!("Trick {idx} has no winner")))?;
        let slot = scores
            .get_mut(winner as usize)
            .ok_or_else(|| DomainError::invariant(format!("Trick {idx} won by seat {winner}")))?;
        *slot = slot.saturating_add(trick.trick_score());
    }

    let total: u32 = scores.iter().map(|&s| s as u32).sum();
    if total != ROUND_POINTS as u32 {
        return Err(DomainError::invariant(format!(
            "Round scores sum to {total}, expected {ROUND_POINTS}"
        )));
    }
    Ok(scores)
}

/// Seat that took every point of the round, if any.
pub fn moon_shooter(round_scores: &[u8; PLAYERS]) -> Option<PlayerId> {
    round_scores
        .iter()
        .position(|&s| s == MOON_SHOT_POINTS)
        .map(|seat| seat as PlayerId)
}

/// Amount each seat's total grows by for these round scores.
///
/// Normally a seat's round score. When one seat scored 26 it receives 0 and
/// every other seat receives 26.
pub fn total_score_deltas(round_scores: &[u8; PLAYERS]) -> [u32; PLAYERS] {
    match moon_shooter(round_scores) {
        Some(shooter) => std::array::from_fn(|seat| {
            if seat == shooter as usize {
                0
            } else {
                MOON_SHOT_POINTS as u32
            }
        }),
        None => round_scores.map(|s| s as u32),
    }
}

/// Result of folding one round into the cumulative totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_position: u32,
    pub round_scores: [u8; PLAYERS],
    pub deltas: [u32; PLAYERS],
    pub totals_after: [u32; PLAYERS],
    pub moon_shooter: Option<PlayerId>,
}

/// Per-seat cumulative totals across the rounds of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: [u32; PLAYERS],
    history: Vec<RoundResult>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from totals persisted by the host.
    pub fn with_totals(totals: [u32; PLAYERS]) -> Self {
        Self {
            totals,
            history: Vec::new(),
        }
    }

    pub fn totals(&self) -> [u32; PLAYERS] {
        self.totals
    }

    pub fn total(&self, seat: PlayerId) -> u32 {
        self.totals.get(seat as usize).copied().unwrap_or(0)
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn rounds_scored(&self) -> usize {
        self.history.len()
    }

    /// Add one round's scores, applying the moon-shot inversion.
    pub fn apply_round(&mut self, round_position: u32, round_scores: [u8; PLAYERS]) -> RoundResult {
        let deltas = total_score_deltas(&round_scores);
        for (total, delta) in self.totals.iter_mut().zip(deltas) {
            *total += delta;
        }
        let result = RoundResult {
            round_position,
            round_scores,
            deltas,
            totals_after: self.totals,
            moon_shooter: moon_shooter(&round_scores),
        };
        self.history.push(result.clone());
        result
    }

    /// Highest total on the board.
    pub fn max_total(&self) -> u32 {
        self.totals.iter().copied().max().unwrap_or(0)
    }

    /// Seats sharing the lowest total (the leaders in Hearts).
    pub fn leaders(&self) -> Vec<PlayerId> {
        let min = self.totals.iter().copied().min().unwrap_or(0);
        (0..PLAYERS as PlayerId)
            .filter(|&seat| self.totals[seat as usize] == min)
            .collect()
    }
}
