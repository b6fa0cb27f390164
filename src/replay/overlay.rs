//! Per-frame overlay drawn on top of the board

use crate::board::{Board, Position};
use rustc_hash::FxHashMap;

/// Overlay color band for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Path length within the threshold
    InRange,
    /// Path length above the threshold
    OverThreshold,
    /// Collision or cycle; the walk stopped here
    Error,
}

/// Annotation for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayCell {
    pub paint: Paint,
    /// Replacement glyph (the trail marker), if any
    pub glyph: Option<char>,
}

/// How the walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// No moves to replay
    Empty,
    /// Every move was painted
    Complete,
    /// Left the board; nothing painted at or after `at`
    OutOfBounds { at: Position },
    /// Hit an obstacle at `at`
    Obstacle { at: Position },
    /// Revisited a painted cell at `at`
    Cycle { at: Position },
}

impl WalkOutcome {
    /// Position that received the error highlight, if any
    pub fn error_at(&self) -> Option<Position> {
        match *self {
            WalkOutcome::Obstacle { at } | WalkOutcome::Cycle { at } => Some(at),
            _ => None,
        }
    }
}

/// Result of one replay. Rebuilt from scratch every frame.
#[derive(Debug, Clone)]
pub struct Overlay {
    cells: FxHashMap<Position, OverlayCell>,
    color: Paint,
    outcome: WalkOutcome,
    letters: String,
}

impl Overlay {
    pub(crate) fn new(color: Paint, letters: String) -> Self {
        Overlay {
            cells: FxHashMap::default(),
            color,
            outcome: WalkOutcome::Empty,
            letters,
        }
    }

    pub(crate) fn paint(&mut self, pos: Position, glyph: Option<char>) {
        let color = self.color;
        let cell = self.cells.entry(pos).or_insert(OverlayCell {
            paint: color,
            glyph: None,
        });
        cell.paint = color;
        if glyph.is_some() {
            cell.glyph = glyph;
        }
    }

    /// Error highlight keeps any glyph already stamped on the cell
    pub(crate) fn mark_error(&mut self, pos: Position) {
        self.cells
            .entry(pos)
            .and_modify(|c| c.paint = Paint::Error)
            .or_insert(OverlayCell {
                paint: Paint::Error,
                glyph: None,
            });
    }

    pub(crate) fn finish(&mut self, outcome: WalkOutcome) {
        self.outcome = outcome;
    }

    /// Overlay color chosen for this frame
    pub fn color(&self) -> Paint {
        self.color
    }

    pub fn outcome(&self) -> WalkOutcome {
        self.outcome
    }

    /// Move letters for the heads-up display
    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn cell(&self, pos: Position) -> Option<&OverlayCell> {
        self.cells.get(&pos)
    }

    pub fn paint_at(&self, pos: Position) -> Option<Paint> {
        self.cells.get(&pos).map(|c| c.paint)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&Position, &OverlayCell)> {
        self.cells.iter()
    }

    /// Number of annotated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Glyph shown at `pos` once the overlay is composed onto `board`
    pub fn glyph_at(&self, board: &Board, pos: Position) -> Option<char> {
        let base = board.cell(pos)?;
        Some(self.cell(pos).and_then(|c| c.glyph).unwrap_or(base))
    }
}
