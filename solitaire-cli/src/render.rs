//! Text rendering and coordinate parsing shared by the commands

use anyhow::{bail, Context, Result};

use solitaire_core::{Cell, Game, GameStatus, Jump, Pos, BOARD_SIZE};

// ============================================================================
// RENDERING
// ============================================================================

/// Draw the board as a character grid.
///
/// `o` marble, `.` hole, `@` selected marble, `*` empty winning hole.
pub fn render_board(game: &Game) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        out.push_str(&format!(" {}", c));
    }
    out.push('\n');

    for (r, row) in game.board().rows().enumerate() {
        out.push_str(&format!(" {} ", r));
        for (c, cell) in row.iter().enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            let glyph = match cell {
                Cell::Invalid => ' ',
                Cell::Marble if game.selection() == Some(pos) => '@',
                Cell::Marble => 'o',
                Cell::Empty if game.winning_cell() == pos => '*',
                Cell::Empty => '.',
            };
            out.push(' ');
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// One-line summary: remaining marbles plus terminal state
pub fn status_line(game: &Game) -> String {
    let remaining = format!("Remaining: {}", game.count_marbles());
    match game.status() {
        GameStatus::InProgress => remaining,
        GameStatus::Won => format!("{}  Game Won!", remaining),
        GameStatus::Stuck { .. } => format!("{}  No moves left!", remaining),
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse "R,C"
pub fn parse_pos(text: &str) -> Result<Pos> {
    let (row, col) = text
        .split_once(',')
        .with_context(|| format!("Expected ROW,COL but got '{}'", text))?;
    let row = row
        .trim()
        .parse::<i32>()
        .with_context(|| format!("Bad row in '{}'", text))?;
    let col = col
        .trim()
        .parse::<i32>()
        .with_context(|| format!("Bad column in '{}'", text))?;
    Ok(Pos::new(row, col))
}

/// Parse "R,C:R,C"
pub fn parse_jump(text: &str) -> Result<Jump> {
    let (from, to) = text
        .split_once(':')
        .with_context(|| format!("Expected FROM:TO but got '{}'", text))?;
    Ok(Jump::new(parse_pos(from)?, parse_pos(to)?))
}

/// Parse a whitespace-separated move script
pub fn parse_script(text: &str) -> Result<Vec<Jump>> {
    text.split_whitespace().map(parse_jump).collect()
}

/// Parse two integers from command arguments, e.g. `["1", "3"]`
pub fn parse_pos_args(args: &[&str]) -> Result<Pos> {
    match args {
        [single] => parse_pos(single),
        [row, col] => {
            let row = row.parse::<i32>().with_context(|| format!("Bad row '{}'", row))?;
            let col = col.parse::<i32>().with_context(|| format!("Bad column '{}'", col))?;
            Ok(Pos::new(row, col))
        }
        _ => bail!("Expected a cell as 'ROW COL' or 'ROW,COL'"),
    }
}

// ============================================================================
// TESTS
// ============================================================================
