//! Command-line configuration

use crate::replay::{CycleDetection, ReplayMode, ReplayOptions};
use crate::session::SessionConfig;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Draw a path across a text board.
///
/// Keys: h/j/k/l move, H/J/K/L move five, space toggles drawing, esc
/// freezes the path, u undoes, backspace erases, ctrl-c quits.
#[derive(Debug, Parser)]
#[command(name = "traceboard", version, about)]
pub struct Cli {
    /// Path length above which the path is highlighted as too long
    #[arg(default_value_t = 0)]
    pub threshold: usize,

    /// Board file to load
    #[arg(long, default_value = "board.txt")]
    pub board: PathBuf,

    /// Replay the path as a repeating pattern until it stops
    #[arg(long)]
    pub repeat: bool,

    /// Self-intersection check
    #[arg(long, value_enum, default_value_t = CycleArg::Exact)]
    pub cycle: CycleArg,

    /// Write a log to this file (nothing is logged otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity when --log-file is set
    #[arg(long, default_value = "debug")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CycleArg {
    /// Flag any revisit of a painted cell
    Exact,
    /// Flag revisits only after the step safety cap
    Heuristic,
}

impl From<CycleArg> for CycleDetection {
    fn from(arg: CycleArg) -> Self {
        match arg {
            CycleArg::Exact => CycleDetection::Exact,
            CycleArg::Heuristic => CycleDetection::Heuristic,
        }
    }
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            threshold: self.threshold,
            replay: ReplayOptions {
                mode: if self.repeat {
                    ReplayMode::Repeat
                } else {
                    ReplayMode::Once
                },
                cycle: self.cycle.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["traceboard"]).unwrap();

        assert_eq!(cli.board, PathBuf::from("board.txt"));
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.session_config(), SessionConfig::default());
    }

    #[test]
    fn test_threshold_and_flags() {
        let cli = Cli::try_parse_from([
            "traceboard",
            "12",
            "--board",
            "maze.txt",
            "--repeat",
            "--cycle",
            "heuristic",
        ])
        .unwrap();
        let config = cli.session_config();

        assert_eq!(cli.board, PathBuf::from("maze.txt"));
        assert_eq!(config.threshold, 12);
        assert_eq!(config.replay.mode, ReplayMode::Repeat);
        assert_eq!(config.replay.cycle, CycleDetection::Heuristic);
    }

    #[test]
    fn test_rejects_negative_threshold() {
        assert!(Cli::try_parse_from(["traceboard", "-3"]).is_err());
    }
}
