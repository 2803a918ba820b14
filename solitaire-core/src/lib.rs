//! Marble Solitaire Core - Game-state engine
//!
//! This crate provides the rules engine for peg solitaire on the 33-hole
//! English cross:
//! - Board geometry and cell storage
//! - Jump legality and application
//! - Snapshot-based undo/redo
//! - Terminal-state detection (won / stuck)
//! - A game session tying them together, plus random playouts

pub mod board;
pub mod moves;
pub mod history;
pub mod analysis;
pub mod game;
pub mod config;
pub mod error;
pub mod playout;

// Re-exports for convenient access
pub use board::{Board, Cell, Pos, Snapshot, BOARD_SIZE, PLAYABLE_CELLS};
pub use moves::{Jump, check_move, is_valid_move, legal_moves};
pub use history::History;
pub use analysis::{GameStatus, has_any_move, is_won};
pub use game::{ClickOutcome, Game};
pub use config::{GameConfig, DEFAULT_EMPTY_CELL};
pub use error::{GameError, MoveError};
pub use playout::{PlayoutResult, PlayoutStats, random_playout, run_playouts};
