//! Run command - apply a scripted sequence of jumps
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: apply_script(), report_results()
//! - Level 3: build_report()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use solitaire_core::{Game, GameStatus, Jump, MoveError, Pos};

use crate::render::{parse_script, render_board, status_line};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// Jumps as FROM:TO pairs, e.g. "1,3:3,3 2,1:2,3"
    #[arg(long)]
    pub moves: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// The first jump the game refused
#[derive(Clone, Debug, Serialize)]
struct Rejection {
    index: usize,
    jump: Jump,
    reason: String,
}

/// Outcome of a script run
#[derive(Clone, Debug, Serialize)]
struct RunReport {
    start_empty: Pos,
    moves_applied: usize,
    rejected: Option<Rejection>,
    marbles_left: usize,
    removed_marbles: Vec<Pos>,
    status: GameStatus,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the script command
///
/// 1. Parse the move script
/// 2. Apply jumps until one is refused
/// 3. Report results
pub fn run(args: RunArgs, game: Game) -> Result<()> {
    let script = parse_script(&args.moves).context("Failed to parse move script")?;

    tracing::info!(moves = script.len(), start = %game.winning_cell(), "Running move script");

    let (game, rejection) = apply_script(game, &script);
    let report = build_report(&game, rejection);

    report_results(&game, &report, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Apply jumps in order, stopping at the first illegal one
fn apply_script(mut game: Game, script: &[Jump]) -> (Game, Option<(usize, Jump, MoveError)>) {
    for (index, &jump) in script.iter().enumerate() {
        if let Err(err) = solitaire_core::check_move(game.board(), jump) {
            tracing::warn!(index, %jump, error = %err, "Script stopped at illegal move");
            return (game, Some((index, jump, err)));
        }
        // Checked above
        let _ = game.apply_move(jump);
    }
    (game, None)
}

fn report_results(game: &Game, report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_board(game));
        println!("{}", status_line(game));
        print_text_report(report);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn build_report(game: &Game, rejection: Option<(usize, Jump, MoveError)>) -> RunReport {
    RunReport {
        start_empty: game.winning_cell(),
        moves_applied: game.removed_marbles().len(),
        rejected: rejection.map(|(index, jump, err)| Rejection {
            index,
            jump,
            reason: err.to_string(),
        }),
        marbles_left: game.count_marbles(),
        removed_marbles: game.removed_marbles().to_vec(),
        status: game.status(),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn print_text_report(report: &RunReport) {
    println!("\n=== Run Results ===");
    println!("Moves applied:   {}", report.moves_applied);
    println!("Marbles left:    {}", report.marbles_left);
    println!("Removed marbles: {}", format_positions(&report.removed_marbles));
    if let Some(rejected) = &report.rejected {
        println!(
            "Stopped at move {} ({}): {}",
            rejected.index + 1,
            rejected.jump,
            rejected.reason
        );
    }
}

fn format_positions(positions: &[Pos]) -> String {
    if positions.is_empty() {
        return "none".to_string();
    }
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================
