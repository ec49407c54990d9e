// Rust guideline compliant 2026-10-17

//! Configuration management for Bizgroups.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Tab-separated plain text.
    Plain,
}

/// Configuration for Bizgroups behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the management API.
    #[serde(default = "default_url")]
    pub url: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "http://localhost:8282".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            output_format: OutputFormat::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `BIZGROUPS_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BIZGROUPS_URL` - Base URL of the management API
    /// - `BIZGROUPS_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `BIZGROUPS_TIMEOUT_SECS` - Request timeout in seconds
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("BIZGROUPS_URL") {
            self.url = val;
        }

        if let Ok(val) = std::env::var("BIZGROUPS_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::Config(
                        "BIZGROUPS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("BIZGROUPS_TIMEOUT_SECS") {
            self.timeout_secs = val.parse().map_err(|_| {
                crate::Error::Config(
                    "BIZGROUPS_TIMEOUT_SECS must be a positive number".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - url does not use the http or https scheme
    /// - timeout_secs is zero
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(crate::Error::Config(format!(
                "url must start with http:// or https://, got {}",
                self.url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(crate::Error::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests below mutate process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("BIZGROUPS_URL");
        std::env::remove_var("BIZGROUPS_OUTPUT_FORMAT");
        std::env::remove_var("BIZGROUPS_TIMEOUT_SECS");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.url, "http://localhost:8282");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.url, "http://localhost:8282");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_load_from_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
url = "https://admiral.example.com:8282"
output_format = "plain"
timeout_secs = 5
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.url, "https://admiral.example.com:8282");
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_validation_bad_scheme() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "url = \"ftp://host\"").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "timeout_secs = 0").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "url = ").unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_config_env_override_url() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "url = \"http://a:1\"").unwrap();

        std::env::set_var("BIZGROUPS_URL", "http://b:2");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.url, "http://b:2");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_override_output_format() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("BIZGROUPS_OUTPUT_FORMAT", "json");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_format() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("BIZGROUPS_OUTPUT_FORMAT", "yaml");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_timeout() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("BIZGROUPS_TIMEOUT_SECS", "soon");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            url: "https://mgmt.local".to_string(),
            output_format: OutputFormat::Json,
            timeout_secs: 12,
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();

        assert_eq!(original.url, loaded.url);
        assert_eq!(original.output_format, loaded.output_format);
        assert_eq!(original.timeout_secs, loaded.timeout_secs);
    }
}
