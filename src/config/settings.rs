use crate::git::remote::ProviderMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// User configuration, currently a single concern: extra hosting providers
///
/// The `[providers]` table maps remote host names to short prefixes and
/// extends (or overrides) the built-in table.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub providers: BTreeMap<String, String>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("repoident"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        for (host, prefix) in &self.providers {
            if host.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "provider host must not be empty".to_string(),
                ));
            }
            if prefix.is_empty() || prefix.contains('/') {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid prefix for host {}: {}",
                    host, prefix
                )));
            }
        }
        Ok(())
    }

    /// Build the effective provider table: built-ins plus user entries
    pub fn provider_map(&self) -> ProviderMap {
        let mut providers = ProviderMap::builtin();
        for (host, prefix) in &self.providers {
            providers.insert(host.clone(), prefix.clone());
        }
        providers
    }
}
