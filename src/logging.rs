//! File logging setup
//!
//! The TUI owns the terminal, so log lines go to a file under the platform
//! data directory instead of stdout.

use crate::{PomodoroError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file location: $DATA_HOME/pomodoro/pomodoro.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        PomodoroError::LoggingError("Unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Filter directive for this crate at `level`
pub fn filter_directive(level: &str) -> String {
    format!("{}={}", APP_NAME, level.to_lowercase())
}

/// Install a global subscriber appending to `path`
pub fn init_file_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PomodoroError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PomodoroError::LoggingError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(level)))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| PomodoroError::LoggingError(e.to_string()))
}
