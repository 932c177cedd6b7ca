// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::constants::{ACCOUNT_PATH, DEFAULT_TIMEOUT_SECS, NOTES_PATH};

/// TOML configuration for the remote notes service
///
/// Loaded once at process start; `NOTEWIRE_*` environment variables override
/// the file values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_notes_path")]
    pub notes: String,
    #[serde(default = "default_account_path")]
    pub account: String,
}

// Default value functions
fn default_base_url() -> String { "http://localhost:3000".to_string() }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }
fn default_notes_path() -> String { NOTES_PATH.to_string() }
fn default_account_path() -> String { ACCOUNT_PATH.to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            notes: default_notes_path(),
            account: default_account_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults plus environment overrides, for deployments without a file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("NOTEWIRE_BASE_URL") {
            self.server.base_url = value;
        }
        if let Ok(value) = env::var("NOTEWIRE_TIMEOUT_SECS") {
            if let Ok(secs) = value.parse() {
                self.server.timeout_secs = secs;
            }
        }
    }
}
