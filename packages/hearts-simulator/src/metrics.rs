//! Per-game records written by the simulator.

use hearts_engine::domain::rules::PLAYERS;
use hearts_engine::domain::{PlayerId, RoundResult};
use serde::Serialize;

use crate::simulator::GameResult;

/// One JSONL line.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_num: u32,
    pub game_seed: i64,
    pub timestamp: String,
    pub policies: [String; PLAYERS],
    pub max_score: u32,
    pub final_totals: [u32; PLAYERS],
    pub winners: Vec<PlayerId>,
    pub rounds_played: usize,
    pub moon_shots: usize,
    pub duration_ms: f64,
    pub rounds: Vec<RoundResult>,
}

/// One CSV summary row.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_num: u32,
    pub game_seed: i64,
    pub winners: String,
    pub seat0_total: u32,
    pub seat1_total: u32,
    pub seat2_total: u32,
    pub seat3_total: u32,
    pub rounds_played: usize,
    pub moon_shots: usize,
}

impl From<&GameRecord> for CsvSummaryRow {
    fn from(r: &GameRecord) -> Self {
        let winners = r
            .winners
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("|");
        Self {
            game_num: r.game_num,
            game_seed: r.game_seed,
            winners,
            seat0_total: r.final_totals[0],
            seat1_total: r.final_totals[1],
            seat2_total: r.final_totals[2],
            seat3_total: r.final_totals[3],
            rounds_played: r.rounds_played,
            moon_shots: r.moon_shots,
        }
    }
}

pub fn build_game_record(
    game_num: u32,
    policies: [String; PLAYERS],
    max_score: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameRecord {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    GameRecord {
        game_num,
        game_seed: result.game_seed,
        timestamp,
        policies,
        max_score,
        final_totals: result.final_totals,
        winners: result.winners.clone(),
        rounds_played: result.rounds.len(),
        moon_shots: result.moon_shots(),
        duration_ms,
        rounds: result.rounds.clone(),
    }
}
