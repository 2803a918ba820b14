//! Linear undo/redo over full-board snapshots

use crate::board::Snapshot;

/// Two snapshot stacks. After [`History::reset`] the bottom of `undo` is the
/// opening position and the top of `undo` mirrors the live board.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    /// History seeded with the opening position
    pub fn new(initial: Snapshot) -> Self {
        Self {
            undo: vec![initial],
            redo: Vec::new(),
        }
    }

    /// Drop everything and start over from `initial`
    pub fn reset(&mut self, initial: Snapshot) {
        self.undo.clear();
        self.redo.clear();
        self.undo.push(initial);
    }

    /// Record a new position. Any redo branch is discarded.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Step back one position.
    ///
    /// Returns the snapshot the board must be restored to, or `None` when only
    /// the opening position is left.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo.len() <= 1 {
            return None;
        }
        let current = self.undo.pop()?;
        self.redo.push(current);
        self.undo.last()
    }

    /// Step forward one position, or `None` if nothing was undone.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push(next);
        self.undo.last()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Committed positions above the opening one
    pub fn undo_depth(&self) -> usize {
        self.undo.len().saturating_sub(1)
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Snapshot matching the live board
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell, Pos};

    fn positions() -> (Snapshot, Snapshot, Snapshot) {
        let mut board = Board::new(Pos::new(3, 3));
        let a = board.snapshot();
        board.set(Pos::new(1, 3), Cell::Empty);
        let b = board.snapshot();
        board.set(Pos::new(3, 1), Cell::Empty);
        let c = board.snapshot();
        (a, b, c)
    }

    #[test]
    fn test_undo_at_bottom_is_noop() {
        let (a, _, _) = positions();
        let mut history = History::new(a.clone());
        assert!(history.undo().is_none());
        assert_eq!(history.current(), Some(&a));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo() {
        let (a, b, c) = positions();
        let mut history = History::new(a.clone());
        history.commit(b.clone());
        history.commit(c.clone());
        assert_eq!(history.undo_depth(), 2);

        assert_eq!(history.undo(), Some(&b));
        assert_eq!(history.undo(), Some(&a));
        assert!(history.undo().is_none());
        assert_eq!(history.redo_depth(), 2);

        assert_eq!(history.redo(), Some(&b));
        assert_eq!(history.redo(), Some(&c));
        assert!(history.redo().is_none());
        assert_eq!(history.current(), Some(&c));
    }

    #[test]
    fn test_commit_clears_redo() {
        let (a, b, c) = positions();
        let mut history = History::new(a);
        history.commit(b);
        history.undo();
        assert!(history.can_redo());

        history.commit(c.clone());
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.current(), Some(&c));
    }

    #[test]
    fn test_reset() {
        let (a, b, c) = positions();
        let mut history = History::new(a);
        history.commit(b);
        history.undo();
        history.reset(c.clone());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.current(), Some(&c));
    }
}
