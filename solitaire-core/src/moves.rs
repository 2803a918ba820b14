//! Jump legality and application

use crate::board::{Board, Cell, Pos, JUMP_DIRECTIONS};
use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A capturing jump from one hole to another
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: Pos,
    pub to: Pos,
}

impl Jump {
    pub const fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    /// Build from raw (source row, source col, dest row, dest col)
    pub const fn from_coords(sr: i32, sc: i32, dr: i32, dc: i32) -> Self {
        Self::new(Pos::new(sr, sc), Pos::new(dr, dc))
    }

    /// True for exactly two cells along a row or a column
    pub fn is_orthogonal_two(&self) -> bool {
        let drow = (self.to.row - self.from.row).abs();
        let dcol = (self.to.col - self.from.col).abs();
        matches!((drow, dcol), (2, 0) | (0, 2))
    }

    /// Cell jumped over. Only meaningful for orthogonal two-cell jumps.
    pub fn midpoint(&self) -> Pos {
        Pos::new(
            self.from.row + (self.to.row - self.from.row) / 2,
            self.from.col + (self.to.col - self.from.col) / 2,
        )
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Check a jump against the rules, in order:
/// 1. both ends playable
/// 2. orthogonal two-cell displacement
/// 3. marble at source, empty destination
/// 4. marble at the midpoint
///
/// Returns the captured position.
pub fn check_move(board: &Board, jump: Jump) -> Result<Pos, MoveError> {
    if !jump.from.is_playable() {
        return Err(MoveError::NotPlayable(jump.from));
    }
    if !jump.to.is_playable() {
        return Err(MoveError::NotPlayable(jump.to));
    }
    if !jump.is_orthogonal_two() {
        return Err(MoveError::NotOrthogonalJump);
    }
    if board.get(jump.from) != Cell::Marble {
        return Err(MoveError::SourceNotMarble(jump.from));
    }
    if board.get(jump.to) != Cell::Empty {
        return Err(MoveError::DestinationNotEmpty(jump.to));
    }
    let mid = jump.midpoint();
    if !mid.is_playable() || board.get(mid) != Cell::Marble {
        return Err(MoveError::NothingToCapture(mid));
    }
    Ok(mid)
}

/// Pure legality query
pub fn is_valid_move(board: &Board, jump: Jump) -> bool {
    check_move(board, jump).is_ok()
}

/// Rules 2-4 for a jump from an occupied playable source; the hot path of
/// the terminal scan.
pub(crate) fn can_jump(board: &Board, from: Pos, drow: i32, dcol: i32) -> bool {
    let to = from.offset(drow, dcol);
    let mid = from.offset(drow / 2, dcol / 2);
    board.is_empty_hole(to) && board.is_marble(mid)
}

/// Write a jump to the board without checking it. Returns the captured cell.
///
/// Callers must have run [`check_move`] first.
pub(crate) fn apply_jump(board: &mut Board, jump: Jump) -> Pos {
    let mid = jump.midpoint();
    board.set(jump.from, Cell::Empty);
    board.set(mid, Cell::Empty);
    board.set(jump.to, Cell::Marble);
    mid
}

/// All legal jumps, sources in row-major order, directions up/down/left/right
pub fn legal_moves(board: &Board) -> Vec<Jump> {
    let mut moves = Vec::new();
    for from in board.marbles() {
        for &(drow, dcol) in &JUMP_DIRECTIONS {
            if can_jump(board, from, drow, dcol) {
                moves.push(Jump::new(from, from.offset(drow, dcol)));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Board {
        Board::new(Pos::new(3, 3))
    }

    #[test]
    fn test_opening_moves() {
        let board = standard();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&Jump::from_coords(1, 3, 3, 3)));
        assert!(moves.contains(&Jump::from_coords(5, 3, 3, 3)));
        assert!(moves.contains(&Jump::from_coords(3, 1, 3, 3)));
        assert!(moves.contains(&Jump::from_coords(3, 5, 3, 3)));
        for mv in moves {
            assert!(is_valid_move(&board, mv));
        }
    }

    #[test]
    fn test_rejects_bad_displacements() {
        let mut board = Board::empty();
        board.set(Pos::new(2, 2), Cell::Marble);
        board.set(Pos::new(3, 3), Cell::Marble);
        board.set(Pos::new(2, 3), Cell::Marble);

        // Diagonal over a marble into an empty hole
        assert_eq!(
            check_move(&board, Jump::from_coords(2, 2, 4, 4)),
            Err(MoveError::NotOrthogonalJump)
        );
        // One step
        assert_eq!(
            check_move(&board, Jump::from_coords(2, 2, 2, 1)),
            Err(MoveError::NotOrthogonalJump)
        );
        // Three steps
        assert_eq!(
            check_move(&board, Jump::from_coords(2, 2, 2, 5)),
            Err(MoveError::NotOrthogonalJump)
        );
        // Zero displacement
        assert!(!is_valid_move(&board, Jump::from_coords(2, 2, 2, 2)));
    }

    #[test]
    fn test_rule_order() {
        let board = standard();
        assert_eq!(
            check_move(&board, Jump::from_coords(0, 0, 0, 2)),
            Err(MoveError::NotPlayable(Pos::new(0, 0)))
        );
        assert_eq!(
            check_move(&board, Jump::from_coords(1, 3, 3, 3 + 7)),
            Err(MoveError::NotPlayable(Pos::new(3, 10)))
        );
        // Destination occupied
        assert_eq!(
            check_move(&board, Jump::from_coords(0, 3, 2, 3)),
            Err(MoveError::DestinationNotEmpty(Pos::new(2, 3)))
        );
        // Source empty
        assert_eq!(
            check_move(&board, Jump::from_coords(3, 3, 1, 3)),
            Err(MoveError::SourceNotMarble(Pos::new(3, 3)))
        );
    }

    #[test]
    fn test_needs_marble_to_capture() {
        let mut board = Board::empty();
        board.set(Pos::new(3, 1), Cell::Marble);
        assert_eq!(
            check_move(&board, Jump::from_coords(3, 1, 3, 3)),
            Err(MoveError::NothingToCapture(Pos::new(3, 2)))
        );
    }

    #[test]
    fn test_apply_jump() {
        let mut board = standard();
        let jump = Jump::from_coords(1, 3, 3, 3);
        assert_eq!(check_move(&board, jump), Ok(Pos::new(2, 3)));

        let captured = apply_jump(&mut board, jump);
        assert_eq!(captured, Pos::new(2, 3));
        assert_eq!(board.get(Pos::new(1, 3)), Cell::Empty);
        assert_eq!(board.get(Pos::new(2, 3)), Cell::Empty);
        assert_eq!(board.get(Pos::new(3, 3)), Cell::Marble);
        assert_eq!(board.count_marbles(), 31);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Jump::from_coords(5, 3, 3, 3).midpoint(), Pos::new(4, 3));
        assert_eq!(Jump::from_coords(3, 5, 3, 3).midpoint(), Pos::new(3, 4));
    }
}
