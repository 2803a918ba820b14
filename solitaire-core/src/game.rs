//! Game session: the command/query surface a front end drives
//!
//! A [`Game`] owns the live board, the undo/redo history, the capture log,
//! the winning cell and the current selection. Every mutation goes through
//! here so the top of the undo stack always mirrors the board.

use crate::analysis::{self, GameStatus};
use crate::board::{Board, Cell, Pos};
use crate::config::GameConfig;
use crate::error::{GameError, MoveError};
use crate::history::History;
use crate::moves::{self, Jump};

// ============================================================================
// CLICK OUTCOMES
// ============================================================================

/// Result of a select-or-move click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off the board, or an empty hole with nothing selected
    Ignored,
    /// A marble was selected
    Selected(Pos),
    /// Another marble replaced the selection
    SelectionChanged(Pos),
    /// The selected marble jumped
    Moved { jump: Jump, captured: Pos },
    /// The jump from the selection was illegal; selection cleared
    Rejected(MoveError),
}

// ============================================================================
// GAME
// ============================================================================

/// Single-player session (clone to branch)
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    winning_cell: Pos,
    history: History,
    removed: Vec<Pos>,
    selection: Option<Pos>,
    steps: u32,
}

impl Default for Game {
    fn default() -> Self {
        let config = GameConfig::default();
        let board = Board::new(config.start_empty);
        let history = History::new(board.snapshot());
        Self {
            board,
            winning_cell: config.start_empty,
            history,
            removed: Vec::new(),
            selection: None,
            steps: 0,
        }
    }
}

impl Game {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game with the configured starting hole
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut game = Self::default();
        game.reset(config.start_empty)?;
        Ok(game)
    }

    /// Start from an arbitrary position. The position becomes the bottom of
    /// the history and the capture log starts empty.
    pub fn from_position(board: Board, winning_cell: Pos) -> Result<Self, GameError> {
        if !winning_cell.is_playable() {
            return Err(GameError::NotPlayable(winning_cell));
        }
        let history = History::new(board.snapshot());
        let mut game = Self {
            board,
            winning_cell,
            history,
            removed: Vec::new(),
            selection: None,
            steps: 0,
        };
        game.log_board();
        Ok(game)
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Rebuild the board with `empty` as the only hole and make it the
    /// winning cell. History, capture log and selection are cleared.
    pub fn reset(&mut self, empty: Pos) -> Result<(), GameError> {
        if !empty.is_playable() {
            tracing::warn!(cell = %empty, "Rejected reset to a cell off the board");
            return Err(GameError::NotPlayable(empty));
        }
        self.rebuild(empty);
        tracing::info!(%empty, "Board reset");
        self.log_board();
        Ok(())
    }

    /// Reset with the current winning cell
    pub fn restart(&mut self) {
        self.rebuild(self.winning_cell);
        tracing::info!(empty = %self.winning_cell, "Board restarted");
        self.log_board();
    }

    /// Move the winning cell. Choosing a different cell restarts the game
    /// around it and returns `true`; the current cell is a no-op.
    pub fn set_winning_cell(&mut self, pos: Pos) -> Result<bool, GameError> {
        if !pos.is_playable() {
            return Err(GameError::NotPlayable(pos));
        }
        if pos == self.winning_cell {
            return Ok(false);
        }
        self.reset(pos)?;
        Ok(true)
    }

    /// Validate and play a jump. Returns the captured cell.
    pub fn apply_move(&mut self, jump: Jump) -> Result<Pos, GameError> {
        let captured = match moves::check_move(&self.board, jump) {
            Ok(captured) => captured,
            Err(err) => {
                tracing::debug!(%jump, error = %err, "Rejected move");
                return Err(err.into());
            }
        };

        moves::apply_jump(&mut self.board, jump);
        self.removed.push(captured);
        self.history.commit(self.board.snapshot());
        self.selection = None;

        tracing::info!(%jump, %captured, marbles = self.count_marbles(), "Move executed");
        self.log_board();
        Ok(captured)
    }

    /// Go back one committed position
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.undo().ok_or(GameError::NothingToUndo)?;
        self.board.restore(snapshot);
        self.selection = None;

        tracing::info!(marbles = self.count_marbles(), "Undo applied");
        self.log_board();
        Ok(())
    }

    /// Replay the last undone position
    pub fn redo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.redo().ok_or(GameError::NothingToRedo)?;
        self.board.restore(snapshot);
        self.selection = None;

        tracing::info!(marbles = self.count_marbles(), "Redo applied");
        self.log_board();
        Ok(())
    }

    /// Select-or-move: the first click picks a marble, clicking another
    /// marble switches to it, clicking a hole tries to jump there.
    pub fn click(&mut self, pos: Pos) -> ClickOutcome {
        if !pos.is_playable() {
            return ClickOutcome::Ignored;
        }

        let Some(selected) = self.selection else {
            if self.board.is_marble(pos) {
                self.selection = Some(pos);
                return ClickOutcome::Selected(pos);
            }
            return ClickOutcome::Ignored;
        };

        if self.board.is_marble(pos) {
            self.selection = Some(pos);
            return ClickOutcome::SelectionChanged(pos);
        }

        self.selection = None;
        let jump = Jump::new(selected, pos);
        match self.apply_move(jump) {
            Ok(captured) => ClickOutcome::Moved { jump, captured },
            Err(GameError::IllegalMove(err)) => ClickOutcome::Rejected(err),
            // apply_move only rejects with IllegalMove
            Err(_) => ClickOutcome::Ignored,
        }
    }

    /// Drop the current selection, if any
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn is_valid_move(&self, jump: Jump) -> bool {
        moves::is_valid_move(&self.board, jump)
    }

    pub fn legal_moves(&self) -> Vec<Jump> {
        moves::legal_moves(&self.board)
    }

    pub fn count_marbles(&self) -> usize {
        self.board.count_marbles()
    }

    pub fn has_any_move(&self) -> bool {
        analysis::has_any_move(&self.board)
    }

    pub fn is_won(&self) -> bool {
        analysis::is_won(&self.board, self.winning_cell)
    }

    pub fn status(&self) -> GameStatus {
        analysis::status(&self.board, self.winning_cell)
    }

    pub fn cell_state(&self, pos: Pos) -> Cell {
        self.board.get(pos)
    }

    /// Captured cells in the order they were jumped
    pub fn removed_marbles(&self) -> &[Pos] {
        &self.removed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn winning_cell(&self) -> Pos {
        self.winning_cell
    }

    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    /// Board changes reported so far (resets, moves, undos, redos)
    pub fn steps(&self) -> u32 {
        self.steps
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn rebuild(&mut self, empty: Pos) {
        self.winning_cell = empty;
        self.board.reset(empty);
        self.history.reset(self.board.snapshot());
        self.removed.clear();
        self.selection = None;
    }

    fn log_board(&mut self) {
        self.steps += 1;
        if tracing::enabled!(tracing::Level::DEBUG) {
            let marbles: Vec<String> = self.board.marbles().map(|p| p.to_string()).collect();
            tracing::debug!(
                step = self.steps,
                total = marbles.len(),
                removed = self.removed.len(),
                marbles = %marbles.join(" "),
                "Marbles on board"
            );
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
