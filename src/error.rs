//! Startup errors
//!
//! Only startup can fail. Once the session is running, anomalies are shown
//! on the board and terminal I/O errors propagate as [`std::io::Error`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot read board '{}': {source}", .path.display())]
    BoardUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
