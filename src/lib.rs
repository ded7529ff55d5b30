//! Pomodoro - focus/break interval timer
//!
//! A terminal application that cycles between focus sessions and breaks,
//! with a pure state machine at its core and pluggable render sinks.

use std::fmt;

pub mod app;
pub mod config;
pub mod cue;
pub mod logging;
pub mod plain;
pub mod session;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum PomodoroError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log subscriber could not be installed
    LoggingError(String),
}

impl fmt::Display for PomodoroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PomodoroError::IoError(err) => write!(f, "I/O error: {}", err),
            PomodoroError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            PomodoroError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            PomodoroError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for PomodoroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PomodoroError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PomodoroError {
    fn from(err: std::io::Error) -> Self {
        PomodoroError::IoError(err)
    }
}

impl From<toml::de::Error> for PomodoroError {
    fn from(err: toml::de::Error) -> Self {
        PomodoroError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for Pomodoro operations
pub type Result<T> = std::result::Result<T, PomodoroError>;

/// Error handling utilities
pub mod error {
    use super::PomodoroError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &PomodoroError) -> String {
        match error {
            PomodoroError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            PomodoroError::TuiError(_) => {
                "The terminal could not be drawn. Try a larger window or run with --plain."
                    .to_string()
            }
            PomodoroError::LoggingError(_) => {
                "Logging is unavailable. The timer still works; check the data directory permissions."
                    .to_string()
            }
            PomodoroError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check file permissions for the config and data directories."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "pomodoro";
pub const CONFIG_FILE: &str = "pomodoro.toml";
pub const LOG_FILE: &str = "pomodoro.log";
