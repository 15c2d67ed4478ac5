//! Configuration data model.
//!
//! All structs derive `Deserialize` and fill missing keys with defaults.
//! Every field has a sensible default so the form works out of the box
//! against a local development server.

use crate::i18n::Lang;
use serde::Deserialize;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub language: Lang,
    /// Show the title and subtitle above the form.
    #[serde(default = "default_true")]
    pub show_headers: bool,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Lang::default(),
            show_headers: true,
            endpoint: EndpointConfig::default(),
            timing: TimingConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where submissions are posted.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Scheme, host and port of the site, e.g. `https://example.com`.
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            path: default_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EndpointConfig {
    pub fn url(&self) -> String {
        let origin = self.origin.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", origin, self.path)
        } else {
            format!("{}/{}", origin, self.path)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Delays of the submission sequence and the panel cross-fade.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_loading_ms")]
    pub loading_ms: u64,
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loading_ms: default_loading_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl TimingConfig {
    pub fn loading(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Height limit of the project description before it scrolls.
    #[serde(default = "default_about_max_rows")]
    pub about_max_rows: u16,
    #[serde(default = "default_form_width")]
    pub form_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            about_max_rows: default_about_max_rows(),
            form_width: default_form_width(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_origin() -> String {
    "http://localhost:3000".to_string()
}
fn default_path() -> String {
    "/api/send-email".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_loading_ms() -> u64 {
    1500
}
fn default_submit_delay_ms() -> u64 {
    800
}
fn default_fade_ms() -> u64 {
    300
}
fn default_about_max_rows() -> u16 {
    6
}
fn default_form_width() -> u16 {
    72
}
fn default_log_dir() -> String {
    "~/.local/share/formcrab/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
