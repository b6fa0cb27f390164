//! Canonical path encoding
//!
//! A path is an anchor plus an ordered list of [`MoveVector`] deltas. Absolute
//! positions are never stored; the replay engine re-derives them every frame.
//!
//! Appending the exact negation of the last move removes that move instead, so
//! the list never holds an adjacent self-cancelling pair.

use crate::board::Position;
use std::ops::Neg;

/// One recorded step. Normally a unit delta on a single axis, but any delta
/// is representable (large moves and diagonals render as generic glyphs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveVector {
    pub dx: i32,
    pub dy: i32,
}

impl MoveVector {
    pub const RIGHT: MoveVector = MoveVector::new(1, 0);
    pub const LEFT: MoveVector = MoveVector::new(-1, 0);
    pub const DOWN: MoveVector = MoveVector::new(0, 1);
    pub const UP: MoveVector = MoveVector::new(0, -1);

    pub const fn new(dx: i32, dy: i32) -> Self {
        MoveVector { dx, dy }
    }

    /// Multiply both components by `factor`
    pub const fn scaled(self, factor: i32) -> Self {
        MoveVector::new(self.dx * factor, self.dy * factor)
    }

    pub const fn offset(self) -> Position {
        Position::new(self.dx, self.dy)
    }

    /// Heads-up display code for this delta
    pub fn letter(self) -> char {
        match (self.dx, self.dy) {
            (dx, dy) if dx != 0 && dy != 0 => '!',
            (1, _) => 'd',
            (-1, _) => 'a',
            (_, 1) => 's',
            (_, -1) => 'w',
            _ => '?',
        }
    }
}

impl Neg for MoveVector {
    type Output = MoveVector;

    fn neg(self) -> MoveVector {
        MoveVector::new(-self.dx, -self.dy)
    }
}

/// The path being drawn (or a snapshot of one)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathState {
    pub anchor: Position,
    moves: Vec<MoveVector>,
    pub active: bool,
}

impl PathState {
    /// Start a fresh, active path at `anchor`
    pub fn new(anchor: Position) -> Self {
        PathState {
            anchor,
            moves: Vec::new(),
            active: true,
        }
    }

    pub fn moves(&self) -> &[MoveVector] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append `delta`, or drop the last move if `delta` retraces it
    pub fn append_or_cancel(&mut self, delta: MoveVector) {
        if self.moves.last().is_some_and(|&last| delta == -last) {
            self.moves.pop();
        } else {
            self.moves.push(delta);
        }
    }

    /// Remove the last move while active. Returns the removed delta so the
    /// caller can walk the cursor back.
    pub fn backspace(&mut self) -> Option<MoveVector> {
        if !self.active {
            return None;
        }
        self.moves.pop()
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Drop every move, keeping the anchor
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Absolute end point of the path
    pub fn end(&self) -> Position {
        self.moves
            .iter()
            .fold(self.anchor, |pos, m| pos + m.offset())
    }

    pub fn to_letters(&self) -> String {
        self.moves.iter().map(|m| m.letter()).collect()
    }
}
