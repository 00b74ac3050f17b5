//! A sequence of rounds sharing one score board.
//!
//! The engine has no notion of a game-ending threshold; hosts ask
//! [`Game::reached`] with whatever limit they play to.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RulesConfig;
use crate::domain::round::Round;
use crate::domain::scoring::{RoundResult, ScoreBoard};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{dealer_for_round, require_seat, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    game_seed: i64,
    starting_dealer: PlayerId,
    #[serde(default)]
    rules: RulesConfig,
    board: ScoreBoard,
    rounds_played: u32,
}

impl Game {
    pub fn new(game_seed: i64, starting_dealer: PlayerId, rules: RulesConfig) -> Result<Self, DomainError> {
        Ok(Self {
            game_seed,
            starting_dealer: require_seat(starting_dealer)?,
            rules,
            board: ScoreBoard::new(),
            rounds_played: 0,
        })
    }

    pub fn game_seed(&self) -> i64 {
        self.game_seed
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Dealer of the round that `start_round` would create next.
    pub fn next_dealer(&self) -> PlayerId {
        dealer_for_round(self.starting_dealer, self.rounds_played)
    }

    /// Create and deal the next round. The deal is reproducible from the game seed.
    pub fn start_round(&self) -> Result<Round, DomainError> {
        let position = self.rounds_played;
        let mut round = Round::new(position, self.next_dealer(), self.rules)?;
        round.deal(derive_dealing_seed(self.game_seed, position))?;
        Ok(round)
    }

    /// Score a completed round and advance to the next position.
    pub fn finish_round(&mut self, round: &mut Round) -> Result<RoundResult, DomainError> {
        if round.position() != self.rounds_played {
            return Err(DomainError::validation(
                ValidationKind::Other("ROUND_OUT_OF_SEQUENCE".into()),
                format!(
                    "Expected round {}, got round {}",
                    self.rounds_played,
                    round.position()
                ),
            ));
        }
        let result = round.finalize(&mut self.board)?;
        self.rounds_played += 1;
        Ok(result)
    }

    /// Whether any seat's total is at or above `max_score`.
    pub fn reached(&self, max_score: u32) -> bool {
        let done = self.board.max_total() >= max_score;
        if done {
            info!(
                rounds = self.rounds_played,
                totals = ?self.board.totals(),
                "Score limit reached"
            );
        }
        done
    }

    /// Seats with the lowest total.
    pub fn winners(&self) -> Vec<PlayerId> {
        self.board.leaders()
    }
}
