//! Autoplay command - random playouts from the configured opening
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: report_results()
//! - Level 3: (delegated to solitaire_core::playout)
//! - Level 4: RNG creation, formatting

use anyhow::{ensure, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use solitaire_core::{run_playouts, Game, PlayoutStats};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct AutoplayArgs {
    /// Number of playouts
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run autoplay command
pub fn run(args: AutoplayArgs, game: Game) -> Result<()> {
    ensure!(args.games > 0, "--games must be at least 1");

    tracing::info!(
        games = args.games,
        seed = ?args.seed,
        start = %game.winning_cell(),
        "Starting random playouts"
    );

    let mut rng = create_rng(args.seed);
    let stats = run_playouts(&game, args.games, &mut rng);

    report_results(&stats, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_results(stats: &PlayoutStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        print_text_results(stats);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(stats: &PlayoutStats) {
    println!("\n=== Playout Results ===");
    println!("Total games: {}", stats.games);
    println!("Won:         {} ({:.1}%)", stats.wins, percent(stats.wins, stats.games));
    println!("Stuck:       {} ({:.1}%)", stats.stuck, percent(stats.stuck, stats.games));
    println!("Avg left:    {:.1}", stats.avg_marbles_left);
    if let Some(best) = stats.best_marbles_left {
        println!("Best finish: {} marble(s) left", best);
        let moves: Vec<String> = stats.best_moves.iter().map(|m| m.to_string()).collect();
        println!("Best line:   {}", moves.join(", "));
    }
}

// ============================================================================
// TESTS
// ============================================================================
