//! Play command - interactive session on stdin/stdout
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: session loop
//! - Level 3: parse_command(), execute()
//! - Level 4: help text

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Args;

use solitaire_core::{ClickOutcome, Game, Jump, Pos};

use crate::render::{parse_pos_args, render_board, status_line};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Do not redraw the board after every command
    #[arg(long)]
    pub quiet: bool,
}

/// A line typed by the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Click(Pos),
    Move(Pos, Pos),
    Undo,
    Redo,
    Restart,
    SetWinningCell(Pos),
    Hint,
    Status,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  click R C        select a marble, or jump the selected marble to R C
  move R C R C     jump from the first cell to the second
  undo | u         undo the last move
  redo | y         redo an undone move
  restart | r      restart with the current winning cup
  win R C          set the winning cup (restarts the game)
  hint             list legal jumps
  status           show marbles left and elapsed time
  help             show this text
  quit | q         leave";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command against the process stdin/stdout
pub fn run(args: PlayArgs, game: Game) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(game, stdin.lock(), stdout.lock(), args.quiet)?;
    Ok(())
}

// ============================================================================
// LEVEL 2 - SESSION LOOP
// ============================================================================

/// Read commands until `quit` or end of input. Returns the final game.
fn play_session<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    mut out: W,
    quiet: bool,
) -> Result<Game> {
    let started = Instant::now();

    writeln!(out, "{}", HELP)?;
    writeln!(out)?;
    write!(out, "{}", render_board(&game))?;
    writeln!(out, "{}", status_line(&game))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        let message = execute(&mut game, command, started);
        writeln!(out, "{}", message)?;

        if !quiet && redraws(command) {
            write!(out, "{}", render_board(&game))?;
            writeln!(out, "{}", status_line(&game))?;
        }
    }

    tracing::info!(
        marbles = game.count_marbles(),
        status = ?game.status(),
        "Session ended"
    );
    Ok(game)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, rest)) = words.split_first() else {
        bail!("Empty command");
    };

    let command = match (name.to_ascii_lowercase().as_str(), rest) {
        ("click" | "c", args) => Command::Click(parse_pos_args(args)?),
        ("move" | "m", [sr, sc, dr, dc]) => Command::Move(
            parse_pos_args(&[*sr, *sc])?,
            parse_pos_args(&[*dr, *dc])?,
        ),
        ("move" | "m", [from, to]) => Command::Move(parse_pos_args(&[*from])?, parse_pos_args(&[*to])?),
        ("move" | "m", _) => bail!("Usage: move R C R C"),
        ("undo" | "u", []) => Command::Undo,
        ("redo" | "y", []) => Command::Redo,
        ("restart" | "r", []) => Command::Restart,
        ("win" | "w", args) => Command::SetWinningCell(parse_pos_args(args)?),
        ("hint", []) => Command::Hint,
        ("status", []) => Command::Status,
        ("help" | "h" | "?", []) => Command::Help,
        ("quit" | "q" | "exit", []) => Command::Quit,
        (other, _) => bail!("Unknown command '{}'. Type 'help' for a list.", other),
    };
    Ok(command)
}

/// Apply one command and return the status message to show
fn execute(game: &mut Game, command: Command, started: Instant) -> String {
    match command {
        Command::Click(pos) => match game.click(pos) {
            ClickOutcome::Ignored => "Nothing to select there.".to_string(),
            ClickOutcome::Selected(_) => "Marble selected.".to_string(),
            ClickOutcome::SelectionChanged(_) => "Selection changed.".to_string(),
            ClickOutcome::Moved { .. } => "Move executed.".to_string(),
            ClickOutcome::Rejected(err) => {
                tracing::warn!(%pos, error = %err, "Rejected click");
                format!("Invalid move: {}.", err)
            }
        },
        Command::Move(from, to) => {
            game.clear_selection();
            match game.apply_move(Jump::new(from, to)) {
                Ok(_) => "Move executed.".to_string(),
                Err(err) => capitalize(&format!("{}.", err)),
            }
        }
        Command::Undo => match game.undo() {
            Ok(()) => "Undo applied.".to_string(),
            Err(err) => capitalize(&format!("{}.", err)),
        },
        Command::Redo => match game.redo() {
            Ok(()) => "Redo applied.".to_string(),
            Err(err) => capitalize(&format!("{}.", err)),
        },
        Command::Restart => {
            game.restart();
            "Board restarted.".to_string()
        }
        Command::SetWinningCell(pos) => match game.set_winning_cell(pos) {
            Ok(true) => "New winning cup set.".to_string(),
            Ok(false) => "That is already the winning cup.".to_string(),
            Err(err) => capitalize(&format!("{}.", err)),
        },
        Command::Hint => {
            let moves = game.legal_moves();
            if moves.is_empty() {
                "No legal jumps.".to_string()
            } else {
                let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                format!("Legal jumps: {}", list.join(", "))
            }
        }
        Command::Status => format!(
            "Time: {:.1} s  Remaining: {}  Removed: {}  Step: {}",
            started.elapsed().as_secs_f64(),
            game.count_marbles(),
            game.removed_marbles().len(),
            game.steps()
        ),
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn redraws(command: Command) -> bool {
    !matches!(command, Command::Hint | Command::Status | Command::Help)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solitaire_core::GameStatus;

    fn run_script(script: &str) -> (Game, String) {
        let mut out = Vec::new();
        let game = play_session(Game::default(), script.as_bytes(), &mut out, true).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("click 1 3").unwrap(), Command::Click(Pos::new(1, 3)));
        assert_eq!(parse_command("c 1,3").unwrap(), Command::Click(Pos::new(1, 3)));
        assert_eq!(
            parse_command("move 1 3 3 3").unwrap(),
            Command::Move(Pos::new(1, 3), Pos::new(3, 3))
        );
        assert_eq!(
            parse_command("m 1,3 3,3").unwrap(),
            Command::Move(Pos::new(1, 3), Pos::new(3, 3))
        );
        assert_eq!(parse_command("U").unwrap(), Command::Undo);
        assert_eq!(parse_command("y").unwrap(), Command::Redo);
        assert_eq!(parse_command("win 0 2").unwrap(), Command::SetWinningCell(Pos::new(0, 2)));
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert!(parse_command("move 1 3").is_err());
        assert!(parse_command("undo 1").is_err());
        assert!(parse_command("jump").is_err());
    }

    #[test]
    fn test_session_moves_and_history() {
        let (game, out) = run_script("move 1 3 3 3\nmove 2 1 2 3\nundo\nredo\nredo\nquit\nmove 5 3 3 3\n");
        assert_eq!(game.count_marbles(), 30);
        assert!(out.contains("Move executed."));
        assert!(out.contains("Undo applied."));
        assert!(out.contains("Redo applied."));
        assert!(out.contains("No redo available."));
    }

    #[test]
    fn test_session_click_messages() {
        let (game, out) = run_script("click 1 3\nclick 5 3\nclick 3 3\nclick 4 4\nclick 5 3\n");
        assert_eq!(game.count_marbles(), 31);
        assert!(out.contains("Marble selected."));
        assert!(out.contains("Selection changed."));
        assert!(out.contains("Move executed."));
        assert!(out.contains("Invalid move: diagonal jump not allowed"));
    }

    #[test]
    fn test_session_winning_cup_and_restart() {
        let (game, out) = run_script("win 3 3\nwin 0 2\nmove 2 2 0 2\nrestart\n");
        assert_eq!(game.winning_cell(), Pos::new(0, 2));
        assert_eq!(game.count_marbles(), 32);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(out.contains("That is already the winning cup."));
        assert!(out.contains("New winning cup set."));
        assert!(out.contains("Board restarted."));
    }

    #[test]
    fn test_session_reports_bad_input() {
        let (_, out) = run_script("fly away\nundo\nwin 0 0\n");
        assert!(out.contains("Unknown command 'fly'"));
        assert!(out.contains("No undo available."));
        assert!(out.contains("Cell (0, 0) is not on the board."));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("no undo available."), "No undo available.");
        assert_eq!(capitalize(""), "");
    }
}
