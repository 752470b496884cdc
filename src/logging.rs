use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("palette-calendar").join("palette-calendar.log"))
}

/// Install the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr. Returns the log path when logging is on.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("palette_calendar={}", config.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to set up logging: {}", e))?;

    Ok(Some(path))
}
