//! Command line argument handling

use super::AppConfig;
use crate::Result;
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "pomodoro")]
#[command(about = "Pomodoro focus/break timer for the terminal")]
#[command(version)]
pub struct Cli {
    /// Focus session length in minutes (5-60, step 5)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(5..=60))]
    pub focus: Option<u32>,

    /// Break session length in minutes (1-15)
    #[arg(short = 'b', long = "break", value_parser = clap::value_parser!(u32).range(1..=15))]
    pub break_minutes: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not ring the terminal bell when a session completes
    #[arg(long)]
    pub no_cue: bool,

    /// Print progress to the terminal instead of opening the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// In plain mode, exit after this many focus sessions
    #[arg(long, requires = "plain", value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: Option<u32>,

    /// Log level written to the log file (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Config file to read: `--config` if given, else the standard location
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => AppConfig::config_file_path(),
        }
    }

    /// Load the config file and apply command line overrides on top
    pub fn load_config(&self) -> Result<AppConfig> {
        let config = AppConfig::load_from(&self.config_path()?)?;
        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(focus) = self.focus {
            config = config.with_focus_minutes(focus);
        }
        if let Some(minutes) = self.break_minutes {
            config = config.with_break_minutes(minutes);
        }
        if self.no_cue {
            config = config.with_cue_enabled(false);
        }
        if let Some(level) = &self.log_level {
            config = config.with_log_level(level.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["pomodoro", "--focus", "50", "--break", "10", "--no-cue"])
            .unwrap();
        let config = cli.apply(AppConfig::default());
        assert_eq!(config.focus_minutes, 50);
        assert_eq!(config.break_minutes, 10);
        assert!(!config.cue_enabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["pomodoro"]).unwrap();
        let base = AppConfig::default().with_focus_minutes(45);
        assert_eq!(cli.apply(base.clone()), base);
    }

    #[test]
    fn test_out_of_range_flags_rejected() {
        assert!(Cli::try_parse_from(["pomodoro", "--focus", "90"]).is_err());
        assert!(Cli::try_parse_from(["pomodoro", "--break", "0"]).is_err());
    }

    #[test]
    fn test_cycles_requires_plain() {
        assert!(Cli::try_parse_from(["pomodoro", "--cycles", "4"]).is_err());
        assert!(Cli::try_parse_from(["pomodoro", "--plain", "--cycles", "0"]).is_err());
        let cli = Cli::try_parse_from(["pomodoro", "--plain", "--cycles", "4"]).unwrap();
        assert_eq!(cli.cycles, Some(4));
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "break_minutes = 12\n").unwrap();

        let cli = Cli::try_parse_from([
            "pomodoro",
            "--config",
            path.to_str().unwrap(),
            "--focus",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.config_path().unwrap(), path);
        let config = cli.load_config().unwrap();
        assert_eq!(config.break_minutes, 12);
        assert_eq!(config.focus_minutes, 30);
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["pomodoro"]).unwrap();
        if let Ok(path) = AppConfig::config_file_path() {
            assert_eq!(cli.config_path().unwrap(), path);
        }
    }
}
