// Undo history of archived paths

use crate::path::PathState;

/// LIFO of archived path snapshots. Unbounded: a session only grows it one
/// entry per freeze.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    snapshots: Vec<PathState>,
}

impl UndoStack {
    pub fn new() -> Self {
        UndoStack {
            snapshots: Vec::new(),
        }
    }

    /// Archive a path
    pub fn push(&mut self, path: PathState) {
        self.snapshots.push(path);
    }

    /// Take back the most recent snapshot, if any
    pub fn pop(&mut self) -> Option<PathState> {
        self.snapshots.pop()
    }

    /// Most recent snapshot without removing it
    pub fn peek(&self) -> Option<&PathState> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
