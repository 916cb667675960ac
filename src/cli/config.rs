//! Configuration file structure
//!
//! ```json
//! {
//!   "data_file": "./data/items.json",
//!   "http": { "port": 3001, "api_prefix": "/api" },
//!   "watch_enabled": true,
//!   "watch_interval_ms": 5007
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::watcher::DEFAULT_POLL_INTERVAL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON array document holding the collection (required)
    pub data_file: String,

    /// HTTP server settings (optional, defaults per field)
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Whether to poll the data file for changes (default: true)
    #[serde(default = "default_watch_enabled")]
    pub watch_enabled: bool,

    /// Polling interval in milliseconds (default: 5007)
    #[serde(default = "default_watch_interval_ms")]
    pub watch_interval_ms: u64,
}

fn default_watch_enabled() -> bool {
    true
}

fn default_watch_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL.as_millis() as u64
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.watch_interval_ms == 0 {
            return Err(CliError::config_error("watch_interval_ms must be > 0"));
        }

        let prefix = &self.http.api_prefix;
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix == "/") {
            return Err(CliError::config_error(format!(
                "Invalid api_prefix: '{}'. Use '' or a path like '/api'.",
                prefix
            )));
        }

        Ok(())
    }

    /// Get data file as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_file)
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_millis(self.watch_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::parse(r#"{"data_file": "items.json"}"#).unwrap();

        assert_eq!(config.data_path(), Path::new("items.json"));
        assert!(config.watch_enabled);
        assert_eq!(config.watch_interval(), DEFAULT_POLL_INTERVAL);
        assert_eq!(config.http, HttpServerConfig::default());
    }

    #[test]
    fn test_missing_data_file_rejected() {
        let err = Config::parse(r#"{"watch_enabled": false}"#).unwrap_err();
        assert_eq!(err.code_str(), "CATALOG_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = Config::parse(r#"{"data_file": "items.json", "watch_interval_ms": 0}"#)
            .unwrap_err();
        assert!(err.message().contains("watch_interval_ms"));
    }

    #[test]
    fn test_prefix_validation() {
        assert!(Config::parse(r#"{"data_file": "a.json", "http": {"api_prefix": ""}}"#).is_ok());
        assert!(Config::parse(r#"{"data_file": "a.json", "http": {"api_prefix": "/v1"}}"#).is_ok());
        assert!(Config::parse(r#"{"data_file": "a.json", "http": {"api_prefix": "api"}}"#).is_err());
        assert!(Config::parse(r#"{"data_file": "a.json", "http": {"api_prefix": "/"}}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/catalogd.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }
}
