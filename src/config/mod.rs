pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, EndpointConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formcrab")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("Invalid config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use std::time::Duration;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.language, Lang::En);
        assert!(cfg.show_headers);
        assert_eq!(cfg.endpoint.url(), "http://localhost:3000/api/send-email");
        assert_eq!(cfg.timing.loading(), Duration::from_millis(1500));
        assert_eq!(cfg.timing.submit_delay(), Duration::from_millis(800));
        assert_eq!(cfg.timing.fade(), Duration::from_millis(300));
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
            language = "de"
            show_headers = false

            [endpoint]
            origin = "https://studio.example/"

            [timing]
            loading_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language, Lang::De);
        assert!(!cfg.show_headers);
        assert_eq!(cfg.endpoint.url(), "https://studio.example/api/send-email");
        assert_eq!(cfg.endpoint.timeout(), Duration::from_secs(15));
        assert_eq!(cfg.timing.loading_ms, 10);
        assert_eq!(cfg.timing.submit_delay_ms, 800);
    }

    #[test]
    fn test_relative_path_is_joined() {
        let endpoint = EndpointConfig {
            origin: "http://127.0.0.1:8080".into(),
            path: "mail".into(),
            timeout_secs: 1,
        };
        assert_eq!(endpoint.url(), "http://127.0.0.1:8080/mail");
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(parse_config("[timing]\nloading_ms = \"soon\"").is_err());
    }
}
