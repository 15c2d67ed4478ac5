//! Diagnostic logging to disk.
//!
//! The terminal belongs to the form, so `tracing` output goes to a daily
//! file named `formcrab_<date>.log` in the configured log directory
//! (default: `~/.local/share/formcrab/logs/`). Nothing is installed when
//! logging is disabled.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config
        .level
        .parse::<Level>()
        .with_context(|| format!("Invalid log level {:?} in [logging]", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

pub fn log_file_name(date: NaiveDate) -> String {
    format!("formcrab_{}.log", date.format("%Y-%m-%d"))
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "formcrab_2026-03-09.log");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/formcrab"), PathBuf::from("/var/log/formcrab"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn test_misspelled_level_is_an_error() {
        let cfg = LoggingConfig {
            enabled: true,
            level: "verbose".into(),
            ..LoggingConfig::default()
        };
        let err = init(&cfg).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid log level \"verbose\""));
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig::default();
        assert_eq!(init(&cfg).unwrap(), None);
    }
}
