use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths::PathManager;

/// Largest real-world UTC offset is +14:00
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("stats.utc_offset_minutes must be within -{max}..={max}, got {0}", max = MAX_OFFSET_MINUTES)]
    OffsetOutOfRange(i32),

    #[error("metadata.{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("logging.level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the watch history collections; defaults to the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct StatsConfig {
    /// Calendar used for streaks and monthly buckets, in minutes east of UTC.
    /// When unset each timestamp keeps its own offset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl StatsConfig {
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MetadataConfig {
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: default_cache_ttl_seconds(),
            cache_capacity: default_cache_capacity(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

impl MetadataConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON logs on or off; by default JSON is used when stdout is not a terminal
    #[serde(default)]
    pub json: Option<bool>,
    /// Write logs to this file (rotated daily) instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

fn default_cache_ttl_seconds() -> u64 {
    600 // 10 minutes
}

fn default_cache_capacity() -> usize {
    500
}

fn default_max_concurrent_requests() -> usize {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, or defaults when it does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(minutes) = self.stats.utc_offset_minutes {
            if minutes.abs() > MAX_OFFSET_MINUTES {
                return Err(ConfigError::OffsetOutOfRange(minutes));
            }
        }

        if self.metadata.cache_ttl_seconds == 0 {
            return Err(ConfigError::ZeroLimit("cache_ttl_seconds"));
        }
        if self.metadata.cache_capacity == 0 {
            return Err(ConfigError::ZeroLimit("cache_capacity"));
        }
        if self.metadata.max_concurrent_requests == 0 {
            return Err(ConfigError::ZeroLimit("max_concurrent_requests"));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::UnknownLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }

    /// Where the watch history lives: the configured directory or the platform default
    pub fn history_dir(&self, paths: &PathManager) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| paths.history_dir())
    }
}
