//! Session context
//!
//! A [`Session`] owns everything that changes during play: the cursor, the
//! current [`PathState`] and the [`UndoStack`]. The board and the
//! [`SessionConfig`] are fixed at construction and passed explicitly, so no
//! state lives outside the session.
//!
//! # State transitions
//!
//! - **Move**: the cursor always moves; the path records the delta only while
//!   active.
//! - **Toggle** (space): pausing just clears the active flag. Resuming
//!   archives the current path (if it has moves) and starts a new one at the
//!   cursor.
//! - **Freeze** (esc): snaps the cursor back to the start marker when it is
//!   still visible, archives the path (if it has moves), clears it and
//!   pauses.
//! - **Undo**: restores the most recent archived path, paused.
//! - **Backspace**: removes the last move while active and walks the cursor
//!   back over it.

use crate::board::{Board, Position, START_MARKER};
use crate::history::UndoStack;
use crate::input::Command;
use crate::path::{MoveVector, PathState};
use crate::replay::{self, Overlay, ReplayOptions};

/// Per-session settings, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Path length above which the overlay switches to the warning color
    pub threshold: usize,
    pub replay: ReplayOptions,
}

/// What a command did, for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Moved { recorded: bool },
    Undone { moves: usize },
    NothingToUndo,
    Resumed { archived: bool },
    Paused,
    Frozen { archived: bool, snapped: bool },
    Erased(MoveVector),
    NothingToErase,
    Quit,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    config: SessionConfig,
    cursor: Position,
    path: PathState,
    undo: UndoStack,
}

impl Session {
    /// Start drawing at the board's anchor
    pub fn new(board: Board, config: SessionConfig) -> Self {
        let cursor = board.anchor();
        Session {
            board,
            config,
            cursor,
            path: PathState::new(cursor),
            undo: UndoStack::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn path(&self) -> &PathState {
        &self.path
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    /// Replay the current path for this frame
    pub fn overlay(&self) -> Overlay {
        replay::replay(
            &self.board,
            &self.path,
            self.config.threshold,
            self.config.replay,
        )
    }

    pub fn apply(&mut self, command: Command) -> Applied {
        let applied = match command {
            Command::Move(delta) => self.move_cursor(delta),
            Command::Undo => self.undo(),
            Command::ToggleActive => self.toggle_active(),
            Command::FreezeAndReset => self.freeze_and_reset(),
            Command::Backspace => self.backspace(),
            Command::Quit => Applied::Quit,
            Command::Ignored => Applied::Ignored,
        };
        log::debug!("{:?} -> {:?}", command, applied);
        applied
    }

    pub fn move_cursor(&mut self, delta: MoveVector) -> Applied {
        self.cursor += delta.offset();
        if !self.path.active {
            return Applied::Moved { recorded: false };
        }
        self.path.append_or_cancel(delta);
        Applied::Moved { recorded: true }
    }

    /// Reinstall the most recent archived path, paused. No-op when the stack
    /// is empty.
    pub fn undo(&mut self) -> Applied {
        match self.undo.pop() {
            Some(mut path) => {
                path.active = false;
                let moves = path.len();
                self.path = path;
                Applied::Undone { moves }
            }
            None => Applied::NothingToUndo,
        }
    }

    pub fn toggle_active(&mut self) -> Applied {
        if self.path.active {
            self.path.toggle_active();
            return Applied::Paused;
        }

        let archived = self.archive();
        self.path = PathState::new(self.cursor);
        Applied::Resumed { archived }
    }

    pub fn freeze_and_reset(&mut self) -> Applied {
        let start = self.board.anchor();
        let snapped = self.overlay().glyph_at(&self.board, start) == Some(START_MARKER);
        if snapped {
            self.cursor = start;
        }

        let archived = self.archive();
        self.path.clear();
        self.path.active = false;
        Applied::Frozen { archived, snapped }
    }

    pub fn backspace(&mut self) -> Applied {
        match self.path.backspace() {
            Some(delta) => {
                self.cursor = self.cursor - delta.offset();
                Applied::Erased(delta)
            }
            None => Applied::NothingToErase,
        }
    }

    /// Push a copy of the current path if it has any moves
    fn archive(&mut self) -> bool {
        if self.path.is_empty() {
            return false;
        }
        self.undo.push(self.path.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(board: &str) -> Session {
        Session::new(Board::parse(board), SessionConfig::default())
    }

    #[test]
    fn test_starts_active_at_anchor() {
        let s = session("  \n @");

        assert_eq!(s.cursor(), Position::new(1, 1));
        assert_eq!(s.path().anchor, Position::new(1, 1));
        assert!(s.path().active);
        assert!(s.undo_stack().is_empty());
    }

    #[test]
    fn test_paused_moves_only_move_cursor() {
        let mut s = session("@   ");
        s.apply(Command::ToggleActive);

        let applied = s.apply(Command::Move(MoveVector::RIGHT));

        assert_eq!(applied, Applied::Moved { recorded: false });
        assert_eq!(s.cursor(), Position::new(1, 0));
        assert!(s.path().is_empty());
    }

    #[test]
    fn test_resume_archives_and_restarts_at_cursor() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));
        s.apply(Command::ToggleActive);
        s.apply(Command::Move(MoveVector::RIGHT));

        let applied = s.apply(Command::ToggleActive);

        assert_eq!(applied, Applied::Resumed { archived: true });
        assert_eq!(s.undo_stack().len(), 1);
        assert_eq!(s.path().anchor, Position::new(2, 0));
        assert!(s.path().is_empty());
        assert!(s.path().active);
    }

    #[test]
    fn test_freeze_snaps_to_start_and_archives() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));
        s.apply(Command::Move(MoveVector::RIGHT));

        let applied = s.apply(Command::FreezeAndReset);

        assert_eq!(
            applied,
            Applied::Frozen {
                archived: true,
                snapped: true
            }
        );
        assert_eq!(s.cursor(), Position::new(0, 0));
        assert!(s.path().is_empty());
        assert!(!s.path().active);
        assert_eq!(s.undo_stack().peek().map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_freeze_without_start_marker_keeps_cursor() {
        let mut s = session("    ");
        s.apply(Command::Move(MoveVector::RIGHT));

        let applied = s.apply(Command::FreezeAndReset);

        assert_eq!(
            applied,
            Applied::Frozen {
                archived: true,
                snapped: false
            }
        );
        assert_eq!(s.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_freeze_twice_archives_once() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));
        s.apply(Command::FreezeAndReset);
        s.apply(Command::FreezeAndReset);

        assert_eq!(s.undo_stack().len(), 1);
    }

    #[test]
    fn test_undo_restores_paused_path() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));
        s.apply(Command::Move(MoveVector::RIGHT));
        s.apply(Command::FreezeAndReset);

        let applied = s.apply(Command::Undo);

        assert_eq!(applied, Applied::Undone { moves: 2 });
        assert_eq!(s.path().moves(), &[MoveVector::RIGHT, MoveVector::RIGHT]);
        assert!(!s.path().active);
        assert!(s.undo_stack().is_empty());
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));
        let before = s.path().clone();

        assert_eq!(s.apply(Command::Undo), Applied::NothingToUndo);
        assert_eq!(s.path(), &before);
        assert!(s.undo_stack().is_empty());
    }

    #[test]
    fn test_backspace_walks_cursor_back() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT.scaled(2)));

        assert_eq!(
            s.apply(Command::Backspace),
            Applied::Erased(MoveVector::new(2, 0))
        );
        assert_eq!(s.cursor(), Position::new(0, 0));
        assert_eq!(s.apply(Command::Backspace), Applied::NothingToErase);
    }

    #[test]
    fn test_backspace_while_paused_is_noop() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));
        s.apply(Command::ToggleActive);

        assert_eq!(s.apply(Command::Backspace), Applied::NothingToErase);
        assert_eq!(s.cursor(), Position::new(1, 0));
        assert_eq!(s.path().len(), 1);
    }

    #[test]
    fn test_quit_and_ignored_leave_state_alone() {
        let mut s = session("@   ");
        s.apply(Command::Move(MoveVector::RIGHT));

        assert_eq!(s.apply(Command::Ignored), Applied::Ignored);
        assert_eq!(s.apply(Command::Quit), Applied::Quit);
        assert_eq!(s.path().len(), 1);
        assert_eq!(s.cursor(), Position::new(1, 0));
    }
}
