//! Hearts simulator CLI: plays whole games in memory with automated seats.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use hearts_engine::ai::{create_auto_player, AutoPlayer};
use hearts_engine::domain::derive_player_seed;
use hearts_engine::domain::rules::PLAYERS;
use hearts_engine::RulesConfig;
use metrics::build_game_record;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::{OutputFormat, Policy};

#[derive(Parser)]
#[command(name = "hearts-simulator")]
#[command(about = "Play Hearts games in memory with automated seats")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Game ends once any seat reaches this total
    #[arg(long, default_value = "100")]
    max_score: u32,

    /// Policy for all seats (shortcut for --seat0..--seat3)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<Policy>,

    #[arg(long, default_value = "random")]
    seat0: Policy,

    #[arg(long, default_value = "random")]
    seat1: Policy,

    #[arg(long, default_value = "random")]
    seat2: Policy,

    #[arg(long, default_value = "random")]
    seat3: Policy,

    /// Base seed; game N uses seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<i64>,

    /// Do not let the queen of spades break hearts
    #[arg(long)]
    queen_keeps_hearts_closed: bool,

    /// Allow point cards on the first trick
    #[arg(long)]
    allow_points_first_trick: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print a summary when done
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,
}

fn init_logging(args: &Args) {
    let default = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if args.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn rules_from(args: &Args) -> Result<RulesConfig, Box<dyn std::error::Error>> {
    let mut rules = RulesConfig::from_env()?;
    if args.queen_keeps_hearts_closed {
        rules.queen_breaks_hearts = false;
    }
    if args.allow_points_first_trick {
        rules.no_points_on_first_trick = false;
    }
    Ok(rules)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args);

    let policies = match args.seats {
        Some(p) => [p; PLAYERS],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let rules = rules_from(&args)?;
    info!(games = args.games, max_score = args.max_score, ?policies, ?rules, "Starting simulator");

    let mut writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;
    let policy_names = policies.map(|p| p.name().to_string());
    let base_seed = args.seed.unwrap_or_else(rand::random::<i64>);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_seed = base_seed.wrapping_add(game_num as i64);
        let game_start = Instant::now();

        let seats = build_seats(&policies, game_seed)?;
        let players: [&dyn AutoPlayer; PLAYERS] =
            [&*seats[0], &*seats[1], &*seats[2], &*seats[3]];
        let dealer = (game_num as usize % PLAYERS) as u8;

        match Simulator::new(game_seed, dealer, rules, args.max_score).simulate_game(&players) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let record = build_game_record(
                    game_num,
                    policy_names.clone(),
                    args.max_score,
                    &result,
                    duration_ms,
                );
                if let Err(e) = writer.write_game(&record) {
                    warn!(game_num, error = %e, "Failed to write game record");
                }
                info!(game_num, totals = ?result.final_totals, winners = ?result.winners, "Game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, game_seed, code = e.code(), error = %e, "Game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }
    Ok(())
}

/// Random seats get a per-seat seed derived from the game seed so whole
/// games replay from `--seed`.
fn build_seats(
    policies: &[Policy; PLAYERS],
    game_seed: i64,
) -> Result<Vec<Box<dyn AutoPlayer>>, Box<dyn std::error::Error>> {
    policies
        .iter()
        .enumerate()
        .map(|(seat, policy)| {
            let seed = derive_player_seed(game_seed, seat as u8);
            create_auto_player(policy.name(), Some(seed))
                .ok_or_else(|| format!("Unknown policy: {}", policy.name()).into())
        })
        .collect()
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; PLAYERS];
    let mut sum = [0u64; PLAYERS];
    let mut moons = 0usize;
    for result in results {
        for (seat, &total) in result.final_totals.iter().enumerate() {
            sum[seat] += total as u64;
        }
        // Lowest total wins; ties share the win.
        for &seat in &result.winners {
            wins[seat as usize] += 1;
        }
        moons += result.moon_shots();
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..PLAYERS {
        let avg = sum[seat] as f64 / results.len() as f64;
        let win_rate = wins[seat] as f64 / results.len() as f64 * 100.0;
        println!(
            "Seat {seat}: avg={avg:.1}, wins={} ({win_rate:.1}%)",
            wins[seat]
        );
    }
    println!("Moon shots: {moons}");
}
