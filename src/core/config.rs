use crate::core::error::StoreError;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub peer_store: DriverConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

/// Names a peer store backend and carries its options
///
/// The options stay a raw TOML table here; each driver decodes them into
/// its own typed config when it is constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    #[serde(default = "default_driver")]
    pub driver: String,
    #[serde(default)]
    pub config: toml::Table,
}

/// Options of the sharded in-memory backend
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    #[serde(default = "default_shards")]
    pub shards: usize,
    #[serde(default = "default_prune_empty_swarms")]
    pub prune_empty_swarms: bool,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_driver() -> String {
    "memory".to_string()
}

fn default_shards() -> usize {
    num_cpus::get() * 4
}

fn default_prune_empty_swarms() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            driver: default_driver(),
            config: toml::Table::new(),
        }
    }
}

impl DriverConfig {
    pub fn new(driver: impl Into<String>, config: toml::Table) -> Self {
        Self {
            driver: driver.into(),
            config,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            shards: default_shards(),
            prune_empty_swarms: default_prune_empty_swarms(),
        }
    }
}

impl MemoryConfig {
    pub fn with_shards(shards: usize) -> Self {
        Self {
            shards,
            ..Self::default()
        }
    }

    /// Decode and validate the driver options handed over by the registry
    pub fn from_driver_config(driver_config: &DriverConfig) -> Result<Self, StoreError> {
        let config: MemoryConfig = toml::Value::Table(driver_config.config.clone())
            .try_into()
            .map_err(|e| StoreError::InvalidConfig(format!("memory: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.shards < 1 {
            return Err(StoreError::InvalidConfig(
                "shards must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.peer_store.driver.is_empty() {
            bail!("peer_store.driver must not be empty");
        }

        Ok(())
    }
}
