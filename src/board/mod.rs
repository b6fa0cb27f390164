//! Static board model
//!
//! A board is parsed once from plain text and never mutated afterwards.
//!
//! # Markers
//!
//! - `'@'`: the start anchor
//! - `'x'`: an obstacle
//! - `' '`: blank, walkable
//!
//! Anything else is inert decoration.
//!
//! # Coordinates
//!
//! [`Position`] is `(x, y)` = (column, row), the same order the movement keys
//! use. Rows are lines of the source text, columns are `char` offsets.

use crate::error::StartupError;
use std::fs;
use std::ops::{Add, AddAssign, Sub};
use std::path::Path;

/// Start anchor marker
pub const START_MARKER: char = '@';

/// Obstacle marker
pub const OBSTACLE_MARKER: char = 'x';

/// Blank, walkable cell
pub const BLANK: char = ' ';

/// An integer (column, row) pair. May be negative or outside any surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Immutable character grid with its parsed bound and anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<char>>,
    width: i32,
    height: i32,
    anchor: Position,
}

impl Board {
    /// Parse board text.
    ///
    /// The width is the longest line; the height stops at the last non-empty
    /// line. If several lines contain `'@'`, the last such line wins, and
    /// within it the leftmost marker. No marker leaves the anchor at `(0, 0)`.
    pub fn parse(raw: &str) -> Self {
        let mut rows = Vec::new();
        let mut width = 0;
        let mut height = 0;
        let mut anchor = Position::default();

        for (row, line) in raw.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let cells: Vec<char> = line.chars().collect();

            if !cells.is_empty() {
                width = width.max(cells.len() as i32);
                height = row as i32 + 1;
                if let Some(col) = cells.iter().position(|&c| c == START_MARKER) {
                    anchor = Position::new(col as i32, row as i32);
                }
            }

            rows.push(cells);
        }

        rows.truncate(height as usize);

        Board {
            rows,
            width,
            height,
            anchor,
        }
    }

    /// Read and parse a board file
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let raw = fs::read_to_string(path).map_err(|source| StartupError::BoardUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Board::parse(&raw))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Check whether a position lies inside the parsed bound
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Character at a position. In-bound cells past the end of a short line
    /// read as blank; out-of-bound positions yield `None`.
    pub fn cell(&self, pos: Position) -> Option<char> {
        if !self.in_bounds(pos) {
            return None;
        }
        let row = &self.rows[pos.y as usize];
        Some(row.get(pos.x as usize).copied().unwrap_or(BLANK))
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.cell(pos) == Some(OBSTACLE_MARKER)
    }

    pub fn is_blank(&self, pos: Position) -> bool {
        self.cell(pos) == Some(BLANK)
    }
}
