//! Path replay
//!
//! Every frame the current path is walked from its anchor over the board and
//! a fresh [`Overlay`] is produced. Nothing from the previous frame survives,
//! so undo, backspace and retrace cancellation never need to invalidate
//! collision state: it is simply recomputed.
//!
//! # Walk rules
//!
//! For each move, in order:
//!
//! 1. Leaving the board's bound stops the walk silently.
//! 2. An obstacle, or a revisit flagged by the [`CycleDetection`] policy,
//!    paints the cell with [`Paint::Error`] and stops the walk.
//! 3. The first move of the list stamps [`TRAIL_MARKER`] on a blank cell.
//! 4. The cell is painted with the frame's overlay color.
//!
//! With [`ReplayMode::Repeat`] the list is walked again and again from where
//! the previous pass ended, until one of the stop conditions fires.
//!
//! Replay never fails. Every anomaly shows up as overlay state.

mod overlay;

pub use overlay::{Overlay, OverlayCell, Paint, WalkOutcome};

use crate::board::Board;
use crate::path::PathState;

/// Step count after which a step onto an already painted cell counts as a
/// cycle, whatever the detection policy
pub const SAFETY_CAP: usize = 10_000;

/// Glyph stamped on a blank cell touched by the first move
pub const TRAIL_MARKER: char = '+';

/// Whether the move list is walked once or tiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    #[default]
    Once,
    Repeat,
}

/// How self-intersection is detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleDetection {
    /// Any step onto a cell painted earlier in the same frame
    #[default]
    Exact,
    /// Only steps past [`SAFETY_CAP`] onto a cell painted earlier
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayOptions {
    pub mode: ReplayMode,
    pub cycle: CycleDetection,
}

/// Pick the overlay color band for a path length
pub fn overlay_color(len: usize, threshold: usize) -> Paint {
    if len > threshold {
        Paint::OverThreshold
    } else {
        Paint::InRange
    }
}

/// Walk `path` over `board` and build this frame's overlay
pub fn replay(
    board: &Board,
    path: &PathState,
    threshold: usize,
    options: ReplayOptions,
) -> Overlay {
    let color = overlay_color(path.len(), threshold);
    let mut overlay = Overlay::new(color, path.to_letters());

    if path.is_empty() {
        return overlay;
    }

    let outcome = walk(board, path, options, &mut overlay);
    log::trace!(
        "replay: {} moves, {} cells, {:?}",
        path.len(),
        overlay.len(),
        outcome
    );
    overlay.finish(outcome);
    overlay
}

fn walk(
    board: &Board,
    path: &PathState,
    options: ReplayOptions,
    overlay: &mut Overlay,
) -> WalkOutcome {
    let mut pos = path.anchor;
    let mut steps = 0usize;

    loop {
        for (i, m) in path.moves().iter().enumerate() {
            steps += 1;
            pos += m.offset();

            if !board.in_bounds(pos) {
                return WalkOutcome::OutOfBounds { at: pos };
            }

            if board.is_obstacle(pos) {
                overlay.mark_error(pos);
                return WalkOutcome::Obstacle { at: pos };
            }

            let painted = overlay.paint_at(pos) == Some(overlay.color());
            let revisit =
                painted && (options.cycle == CycleDetection::Exact || steps > SAFETY_CAP);
            if revisit {
                overlay.mark_error(pos);
                return WalkOutcome::Cycle { at: pos };
            }

            let glyph = (i == 0 && board.is_blank(pos)).then_some(TRAIL_MARKER);
            overlay.paint(pos, glyph);
        }

        if options.mode == ReplayMode::Once {
            return WalkOutcome::Complete;
        }
    }
}
