//! Terminal-state detection
//!
//! Everything here is recomputed from the board on every call; the board is
//! small enough that a full scan is cheap.

use crate::board::{Board, Pos, JUMP_DIRECTIONS};
use crate::moves::can_jump;
use serde::{Deserialize, Serialize};

/// Where a game stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal jump remains
    InProgress,
    /// One marble left, sitting in the winning cell
    Won,
    /// No jumps left without meeting the win condition
    Stuck { marbles_left: usize },
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// True as soon as any marble has a legal jump
pub fn has_any_move(board: &Board) -> bool {
    board.marbles().any(|from| {
        JUMP_DIRECTIONS
            .iter()
            .any(|&(drow, dcol)| can_jump(board, from, drow, dcol))
    })
}

/// No jumps left, one marble left, and it is on `winning`
pub fn is_won(board: &Board, winning: Pos) -> bool {
    !has_any_move(board) && board.count_marbles() == 1 && board.is_marble(winning)
}

pub fn status(board: &Board, winning: Pos) -> GameStatus {
    if has_any_move(board) {
        GameStatus::InProgress
    } else if is_won(board, winning) {
        GameStatus::Won
    } else {
        GameStatus::Stuck {
            marbles_left: board.count_marbles(),
        }
    }
}
