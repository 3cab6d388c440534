//! Configuration management for the resume studio client

use crate::error::{Result, StudioError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Requests never time out unless this is set.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub login_delay_ms: u64,
    pub settings_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub download_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        let download_dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            server: ServerConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                request_timeout_secs: None,
            },
            session: SessionConfig {
                login_delay_ms: 1000,
                settings_delay_ms: 800,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                download_dir,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| StudioError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| StudioError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-studio")
            .join("config.toml")
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.server.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.server.base_url.trim();
        if url.is_empty() {
            return Err(StudioError::Configuration("server.base_url is required".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(StudioError::Configuration(format!(
                "server.base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.server.request_timeout_secs == Some(0) {
            return Err(StudioError::Configuration(
                "server.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a single value by dotted key, e.g. `server.base_url`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
            value
                .parse()
                .map_err(|_| StudioError::Configuration(format!("Invalid value for {}: {}", key, value)))
        }

        match key {
            "server.base_url" => self.server.base_url = value.to_string(),
            "server.request_timeout_secs" => {
                self.server.request_timeout_secs = match value {
                    "" | "none" => None,
                    v => Some(parse(key, v)?),
                }
            }
            "session.login_delay_ms" => self.session.login_delay_ms = parse(key, value)?,
            "session.settings_delay_ms" => self.session.settings_delay_ms = parse(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(StudioError::Configuration)?
            }
            "output.color_output" => self.output.color_output = parse(key, value)?,
            "output.download_dir" => self.output.download_dir = PathBuf::from(value),
            _ => {
                return Err(StudioError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session.login_delay_ms, 1000);
        assert_eq!(config.session.settings_delay_ms, 800);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.server.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("server.base_url", "https://resume.example.com").unwrap();
        config.set_value("server.request_timeout_secs", "30").unwrap();
        config.set_value("output.format", "json").unwrap();

        assert_eq!(config.server.base_url, "https://resume.example.com");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.output.format, OutputFormat::Json);

        assert!(config.set_value("session.login_delay_ms", "soon").is_err());
        assert!(config.set_value("no.such.key", "1").is_err());
    }

    #[test]
    fn test_load_creates_defaults_then_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());

        let mut changed = created.clone();
        changed.session.login_delay_ms = 5;
        changed.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, changed);
    }
}
