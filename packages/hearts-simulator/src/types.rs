//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game
    Jsonl,
    /// CSV summary only
    Csv,
}

/// Seat policy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    Lowest,
    Random,
}

impl Policy {
    /// Name understood by `hearts_engine::ai::create_auto_player`.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Lowest => "lowest",
            Policy::Random => "random",
        }
    }
}
