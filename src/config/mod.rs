//! Configuration management module
//!
//! Handles loading and validation of the timer configuration and user
//! preferences. The file is read at startup and never written back.

use crate::{PomodoroError, Result, APP_NAME, CONFIG_FILE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub mod cli;
pub mod durations;

pub use cli::Cli;
pub use durations::DurationSettings;
use durations::{BREAK_MAX, BREAK_MIN, FOCUS_MAX, FOCUS_MIN};

const MIN_TICK_MILLIS: u64 = 100;
const MAX_TICK_MILLIS: u64 = 60_000;

/// Application configuration loaded from `pomodoro.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial focus session length in minutes
    pub focus_minutes: u32,
    /// Initial break session length in minutes
    pub break_minutes: u32,
    /// Ticker period in milliseconds; one tick removes one second from the session
    pub tick_millis: u64,
    /// Whether to ring the terminal bell when a session completes
    pub cue_enabled: bool,
    /// Ignore duration adjustments while a session is running or paused
    pub lock_durations_while_active: bool,
    /// Log level for the file logger (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let durations = DurationSettings::default();
        Self {
            focus_minutes: durations.focus_minutes(),
            break_minutes: durations.break_minutes(),
            tick_millis: 1000,
            cue_enabled: true,
            lock_durations_while_active: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(FOCUS_MIN..=FOCUS_MAX).contains(&self.focus_minutes) {
            return Err(PomodoroError::ConfigError(format!(
                "focus_minutes must be between {} and {} (got {})",
                FOCUS_MIN, FOCUS_MAX, self.focus_minutes
            )));
        }

        if !(BREAK_MIN..=BREAK_MAX).contains(&self.break_minutes) {
            return Err(PomodoroError::ConfigError(format!(
                "break_minutes must be between {} and {} (got {})",
                BREAK_MIN, BREAK_MAX, self.break_minutes
            )));
        }

        if !(MIN_TICK_MILLIS..=MAX_TICK_MILLIS).contains(&self.tick_millis) {
            return Err(PomodoroError::ConfigError(format!(
                "tick_millis must be between {} and {} (got {})",
                MIN_TICK_MILLIS, MAX_TICK_MILLIS, self.tick_millis
            )));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(PomodoroError::ConfigError(format!(
                    "Unknown log_level: {}",
                    other
                )))
            }
        }

        Ok(())
    }

    /// Duration settings derived from the configured minutes
    pub fn durations(&self) -> DurationSettings {
        DurationSettings::clamped(self.focus_minutes, self.break_minutes)
    }

    /// Ticker period
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Set the focus length
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_minutes = minutes;
        self
    }

    /// Set the break length
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Enable or disable the completion cue
    pub fn with_cue_enabled(mut self, enabled: bool) -> Self {
        self.cue_enabled = enabled;
        self
    }

    /// Set the ticker period in milliseconds
    pub fn with_tick_millis(mut self, millis: u64) -> Self {
        self.tick_millis = millis;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    /// Returns default configuration if file doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            PomodoroError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            PomodoroError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;

        info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/pomodoro/pomodoro.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            PomodoroError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
