//! Cross-shaped board geometry and cell storage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square grid the cross is cut from
pub const BOARD_SIZE: usize = 7;

/// Total cells in the grid, playable or not
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of playable holes on the English cross
pub const PLAYABLE_CELLS: usize = 33;

/// Jump direction vectors (drow, dcol)
/// Index: 0=Up, 1=Down, 2=Left, 3=Right
pub const JUMP_DIRECTIONS: [(i32, i32); 4] = [
    (-2, 0), // Up
    (2, 0),  // Down
    (0, -2), // Left
    (0, 2),  // Right
];

/// Board coordinate (row 0 at the top)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this position lies inside the playable cross
    pub fn is_playable(&self) -> bool {
        is_playable(self.row, self.col)
    }

    /// Offset by (drow, dcol)
    pub fn offset(&self, drow: i32, dcol: i32) -> Pos {
        Pos::new(self.row + drow, self.col + dcol)
    }

    fn index(&self) -> Option<usize> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        let (row, col) = (self.row as usize, self.col as usize);
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Pos::new(row, col)
    }
}

/// Geometric playability test. Rows 0, 1, 5 and 6 only admit columns 2..=4;
/// rows 2..=4 are playable across the full width.
pub fn is_playable(row: i32, col: i32) -> bool {
    let size = BOARD_SIZE as i32;
    if row < 0 || row >= size || col < 0 || col >= size {
        return false;
    }
    match row {
        0 | 1 | 5 | 6 => (2..=4).contains(&col),
        _ => true,
    }
}

/// Contents of a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Marble,
    Empty,
    Invalid,
}

/// Immutable row-major copy of every cell on the board.
///
/// Only [`Board::snapshot`] creates these, so a snapshot always has the
/// board's shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    cells: Vec<Cell>,
}

impl Snapshot {
    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Marbles recorded in this snapshot
    pub fn count_marbles(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Marble).count()
    }
}

/// Live board (mutated in place by the game)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Full board with a single empty hole at `empty`
    pub fn new(empty: Pos) -> Self {
        let mut board = Self {
            cells: [[Cell::Invalid; BOARD_SIZE]; BOARD_SIZE],
        };
        board.reset(empty);
        board
    }

    /// Board with every playable hole empty. Useful for injecting positions.
    pub fn empty() -> Self {
        let mut board = Self {
            cells: [[Cell::Invalid; BOARD_SIZE]; BOARD_SIZE],
        };
        for pos in playable_positions() {
            board.set(pos, Cell::Empty);
        }
        board
    }

    /// Rebuild from a snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut board = Self::empty();
        board.restore(snapshot);
        board
    }

    /// Refill the board, leaving only `empty` open.
    ///
    /// Does not validate `empty`; a non-playable hole yields a full board.
    pub fn reset(&mut self, empty: Pos) {
        for (r, row) in self.cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = if is_playable(r as i32, c as i32) {
                    Cell::Marble
                } else {
                    Cell::Invalid
                };
            }
        }
        if empty.is_playable() {
            self.set(empty, Cell::Empty);
        }
    }

    /// Cell at `pos`, `Invalid` when off the grid
    pub fn get(&self, pos: Pos) -> Cell {
        match pos.index() {
            Some(idx) => self.cells[idx / BOARD_SIZE][idx % BOARD_SIZE],
            None => Cell::Invalid,
        }
    }

    /// Overwrite a playable cell. Writes outside the cross are ignored so the
    /// shape can never change.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if !pos.is_playable() || cell == Cell::Invalid {
            return;
        }
        if let Some(idx) = pos.index() {
            self.cells[idx / BOARD_SIZE][idx % BOARD_SIZE] = cell;
        }
    }

    pub fn is_playable(&self, pos: Pos) -> bool {
        pos.is_playable()
    }

    pub fn is_marble(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Marble
    }

    pub fn is_empty_hole(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Count playable cells holding a marble
    pub fn count_marbles(&self) -> usize {
        self.marbles().count()
    }

    /// Marble positions in row-major order
    pub fn marbles(&self) -> impl Iterator<Item = Pos> + '_ {
        playable_positions().filter(move |&pos| self.is_marble(pos))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.iter().flatten().copied().collect(),
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (idx, &cell) in snapshot.cells.iter().enumerate().take(CELL_COUNT) {
            self.cells[idx / BOARD_SIZE][idx % BOARD_SIZE] = cell;
        }
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> + '_ {
        self.cells.iter()
    }
}

/// All playable positions in row-major order
pub fn playable_positions() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE as i32)
        .flat_map(|r| (0..BOARD_SIZE as i32).map(move |c| Pos::new(r, c)))
        .filter(|pos| pos.is_playable())
}
