//! Configuration file handling.
//!
//! This module provides loading and saving of phishguard configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/phishguard/config.toml`
//! - macOS: `~/Library/Application Support/phishguard/config.toml`
//! - Windows: `%APPDATA%\phishguard\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! model_path = "/opt/phishguard/phishing_model.json"
//! request_timeout_secs = 10
//! user_agent = "Mozilla/5.0"
//! default_format = "table"
//! premium_users = ["premium_user"]
//! extra_trusted_domains = ["mybank.example"]
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::content::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Application configuration.
///
/// Loaded from a TOML file, or created with default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON forest artifact.
    ///
    /// Default: `phishing_model.json` in the working directory
    pub model_path: PathBuf,

    /// Timeout for content-scan HTTP requests, in seconds.
    ///
    /// Default: 10
    pub request_timeout_secs: u64,

    /// User-Agent header sent when fetching pages.
    ///
    /// Default: "Mozilla/5.0"
    pub user_agent: String,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "table", "json"
    /// Default: "table"
    pub default_format: String,

    /// Users whose sessions get the premium tier.
    ///
    /// Default: ["premium_user"]
    pub premium_users: Vec<String>,

    /// Domains trusted in addition to the built-in list.
    pub extra_trusted_domains: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("phishing_model.json"),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_format: "table".to_string(),
            premium_users: vec!["premium_user".to_string()],
            extra_trusted_domains: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text; missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("phishguard")
            .join("config.toml")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
