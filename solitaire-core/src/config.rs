//! Session configuration

use crate::board::Pos;
use serde::{Deserialize, Serialize};

/// Hole left empty on the classic opening
pub const DEFAULT_EMPTY_CELL: Pos = Pos::new(3, 3);

/// Game session configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hole left empty at reset; finishing with the last marble here wins
    pub start_empty: Pos,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_empty: DEFAULT_EMPTY_CELL,
        }
    }
}

impl GameConfig {
    /// Set the starting empty cell
    pub fn with_start_empty(mut self, pos: Pos) -> Self {
        self.start_empty = pos;
        self
    }
}
