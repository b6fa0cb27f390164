//! Key bindings
//!
//! | Key             | Command                          |
//! |-----------------|----------------------------------|
//! | `h` `j` `k` `l` | move one cell left/down/up/right |
//! | `H` `J` `K` `L` | move [`LARGE_STEP`] cells        |
//! | `u`             | undo                             |
//! | space           | toggle drawing (resume/pause)    |
//! | esc             | freeze and reset                 |
//! | backspace       | erase the last move              |
//! | ctrl-c          | quit                             |
//!
//! Arrow keys are reserved and, like every other key, map to
//! [`Command::Ignored`].

use crate::path::MoveVector;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cells covered by a shifted move key
pub const LARGE_STEP: i32 = 5;

/// A request produced by one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(MoveVector),
    Undo,
    ToggleActive,
    FreezeAndReset,
    Backspace,
    Quit,
    Ignored,
}

/// Map a key press to a command
pub fn map_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Command::Quit,
            _ => Command::Ignored,
        };
    }

    match key.code {
        KeyCode::Char('h') => Command::Move(MoveVector::LEFT),
        KeyCode::Char('j') => Command::Move(MoveVector::DOWN),
        KeyCode::Char('k') => Command::Move(MoveVector::UP),
        KeyCode::Char('l') => Command::Move(MoveVector::RIGHT),
        KeyCode::Char('H') => Command::Move(MoveVector::LEFT.scaled(LARGE_STEP)),
        KeyCode::Char('J') => Command::Move(MoveVector::DOWN.scaled(LARGE_STEP)),
        KeyCode::Char('K') => Command::Move(MoveVector::UP.scaled(LARGE_STEP)),
        KeyCode::Char('L') => Command::Move(MoveVector::RIGHT.scaled(LARGE_STEP)),
        KeyCode::Char('u') => Command::Undo,
        KeyCode::Char(' ') => Command::ToggleActive,
        KeyCode::Esc => Command::FreezeAndReset,
        KeyCode::Backspace => Command::Backspace,
        _ => Command::Ignored,
    }
}

/// Map a terminal event. Only key presses carry commands; releases, repeats,
/// resizes and mouse events are ignored (a resize just triggers a redraw).
pub fn map_event(event: &Event) -> Command {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        _ => Command::Ignored,
    }
}
