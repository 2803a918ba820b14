//! Error types for the engine

use crate::board::Pos;

/// Why a jump is illegal
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is not on the board")]
    NotPlayable(Pos),

    #[error("diagonal jump not allowed: a move must jump exactly two cells along a row or column")]
    NotOrthogonalJump,

    #[error("no marble at {0}")]
    SourceNotMarble(Pos),

    #[error("destination {0} is not empty")]
    DestinationNotEmpty(Pos),

    #[error("no marble to capture at {0}")]
    NothingToCapture(Pos),
}

/// Rejected game commands. Every variant leaves the game unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {0} is not on the board")]
    NotPlayable(Pos),

    #[error("invalid move: {0}")]
    IllegalMove(#[from] MoveError),

    #[error("no undo available")]
    NothingToUndo,

    #[error("no redo available")]
    NothingToRedo,
}
