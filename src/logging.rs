// File logging. The terminal belongs to the UI, so logs never go to stderr.

use crate::error::StartupError;
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Install a file logger at `level`
pub fn init(path: &Path, level: LevelFilter) -> Result<(), StartupError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = File::create(path).map_err(|source| StartupError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    simplelog::WriteLogger::init(level, config, file)?;
    Ok(())
}
