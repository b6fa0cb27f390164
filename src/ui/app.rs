//! Main TUI application state and logic

use crate::input::{self, Command};
use crate::replay::WalkOutcome;
use crate::session::{Applied, Session};
use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

use super::panes::{self, StatusRenderData};

/// The main application state
pub struct App {
    /// Board, cursor, path and undo history
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application: redraw, then block for the next event
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let event = event::read()?;
            self.handle_event(&event);
        }

        Ok(())
    }

    /// Handle one terminal event. Resizes need nothing beyond the redraw at
    /// the top of the loop.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Resize(width, height) = event {
            log::debug!("resize to {}x{}", width, height);
            return;
        }
        self.handle_command(input::map_event(event));
    }

    pub fn handle_command(&mut self, command: Command) {
        let applied = self.session.apply(command);
        if applied == Applied::Quit {
            self.should_quit = true;
        }
        if let Some(message) = describe(applied) {
            self.status_message = message;
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let overlay = self.session.overlay();

        panes::render_board_pane(frame, chunks[0], &self.session, &overlay);

        let message = match overlay.outcome() {
            WalkOutcome::Obstacle { at } => format!("Blocked at {},{}", at.x, at.y),
            WalkOutcome::Cycle { at } => format!("Path crosses itself at {},{}", at.x, at.y),
            _ => self.status_message.clone(),
        };

        panes::render_status_bar(
            frame,
            chunks[1],
            &StatusRenderData {
                message: &message,
                path_len: self.session.path().len(),
                threshold: self.session.config().threshold,
                color: overlay.color(),
                outcome: overlay.outcome(),
                drawing: self.session.path().active,
                undo_depth: self.session.undo_stack().len(),
            },
        );
    }
}

/// Status line text for a command, `None` to keep the previous one
fn describe(applied: Applied) -> Option<String> {
    let message = match applied {
        Applied::Moved { recorded: true } => "Drawing".to_string(),
        Applied::Moved { recorded: false } => "Moving cursor".to_string(),
        Applied::Undone { moves } => format!("Restored path with {} move(s)", moves),
        Applied::NothingToUndo => "Nothing to undo".to_string(),
        Applied::Resumed { archived: true } => "Path archived, drawing from cursor".to_string(),
        Applied::Resumed { archived: false } => "Drawing from cursor".to_string(),
        Applied::Paused => "Paused".to_string(),
        Applied::Frozen { archived: true, .. } => "Path frozen".to_string(),
        Applied::Frozen { archived: false, .. } => "Reset".to_string(),
        Applied::Erased(_) => "Erased last move".to_string(),
        Applied::NothingToErase => "Nothing to erase".to_string(),
        Applied::Quit => "Bye".to_string(),
        Applied::Ignored => return None,
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::session::SessionConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(board: &str) -> App {
        App::new(Session::new(Board::parse(board), SessionConfig::default()))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app("@  ");
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(app.should_quit);
    }

    #[test]
    fn test_ignored_key_keeps_message() {
        let mut app = app("@  ");
        app.handle_event(&key(KeyCode::Char('l')));
        app.handle_event(&key(KeyCode::Char('z')));

        assert_eq!(app.status_message, "Drawing");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_resize_changes_nothing() {
        let mut app = app("@  ");
        app.handle_event(&Event::Resize(10, 5));

        assert_eq!(app.status_message, "Ready!");
        assert!(app.session.path().is_empty());
    }

    #[test]
    fn test_undo_message() {
        let mut app = app("@  ");
        app.handle_event(&key(KeyCode::Char('u')));

        assert_eq!(app.status_message, "Nothing to undo");
    }
}
