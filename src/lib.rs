//! # Introduction
//!
//! traceboard is a terminal puzzle: the player draws a path across a static
//! text board and gets live feedback on collisions, self-intersection and path
//! length. The board is rendered through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Frame pipeline
//!
//! ```text
//! Key → Command → Session (path / undo) → Replay → Overlay → TUI
//! ```
//!
//! 1. [`input`] — maps key events to [`input::Command`]s.
//! 2. [`session`] — applies commands to the cursor, the current
//!    [`path::PathState`] and the [`history::UndoStack`].
//! 3. [`replay`] — re-walks the path over the [`board::Board`] every frame and
//!    produces a fresh [`replay::Overlay`] with collisions and cycles marked.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Board format
//!
//! Plain text, one row per line. `@` is the start, `x` an obstacle, a space is
//! walkable; any other character is decoration.

pub mod board;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod path;
pub mod replay;
pub mod session;
pub mod ui;
