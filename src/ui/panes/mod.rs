//! TUI pane rendering modules
//!
//! - [`board`]: the board with the replayed path overlay, start marker and cursor
//! - [`status`]: status bar with path length, keybindings and drawing state
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state and keeps nothing between frames.

pub mod board;
pub mod status;

pub use board::render_board_pane;
pub use status::{render_status_bar, StatusRenderData};
