//! Marble Solitaire CLI - Command-line front end
//!
//! Commands:
//! - play: Interactive session on the terminal
//! - run: Apply a scripted sequence of jumps
//! - autoplay: Random playouts from the opening

mod autoplay;
mod play;
mod render;
mod run_cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use solitaire_core::{Game, GameConfig, Pos, DEFAULT_EMPTY_CELL};

#[derive(Parser)]
#[command(name = "solitaire")]
#[command(about = "Marble solitaire on the 33-hole cross board")]
struct Cli {
    /// Row of the starting empty hole (also the winning cup)
    #[arg(long, global = true, default_value_t = DEFAULT_EMPTY_CELL.row)]
    empty_row: i32,

    /// Column of the starting empty hole
    #[arg(long, global = true, default_value_t = DEFAULT_EMPTY_CELL.col)]
    empty_col: i32,

    /// Log engine events at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play(play::PlayArgs),
    /// Apply a move script and report the result
    Run(run_cmd::RunArgs),
    /// Random playouts
    Autoplay(autoplay::AutoplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = GameConfig::default().with_start_empty(Pos::new(cli.empty_row, cli.empty_col));
    let game = Game::new(config).context("Invalid starting hole")?;

    match cli.command {
        Commands::Play(args) => play::run(args, game),
        Commands::Run(args) => run_cmd::run(args, game),
        Commands::Autoplay(args) => autoplay::run(args, game),
    }
}

/// Logs go to stderr so they never mix with board output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
