//! In-memory game runner.
//!
//! Drives [`Game`] rounds with automated seats until the score limit is
//! reached. All validation stays in the engine; this module only loops.

use hearts_engine::ai::{play_out_round, AutoPlayer};
use hearts_engine::domain::rules::PLAYERS;
use hearts_engine::domain::{PlayerId, RoundResult};
use hearts_engine::{DomainError, Game, RulesConfig};
use tracing::debug;

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_seed: i64,
    pub final_totals: [u32; PLAYERS],
    pub winners: Vec<PlayerId>,
    pub rounds: Vec<RoundResult>,
}

impl GameResult {
    pub fn moon_shots(&self) -> usize {
        self.rounds.iter().filter(|r| r.moon_shooter.is_some()).count()
    }
}

pub struct Simulator {
    game_seed: i64,
    starting_dealer: PlayerId,
    rules: RulesConfig,
    max_score: u32,
}

impl Simulator {
    pub fn new(game_seed: i64, starting_dealer: PlayerId, rules: RulesConfig, max_score: u32) -> Self {
        Self {
            game_seed,
            starting_dealer,
            rules,
            max_score,
        }
    }

    pub fn simulate_game(
        &self,
        players: &[&dyn AutoPlayer; PLAYERS],
    ) -> Result<GameResult, DomainError> {
        let mut game = Game::new(self.game_seed, self.starting_dealer, self.rules)?;

        while !game.reached(self.max_score) {
            let mut round = game.start_round()?;
            play_out_round(&mut round, players)?;
            let result = game.finish_round(&mut round)?;
            debug!(
                game_seed = self.game_seed,
                round = result.round_position,
                scores = ?result.round_scores,
                totals = ?result.totals_after,
                "Round finished"
            );
        }

        Ok(GameResult {
            game_seed: self.game_seed,
            final_totals: game.board().totals(),
            winners: game.winners(),
            rounds: game.board().history().to_vec(),
        })
    }
}
