pub mod config;
pub mod paths;

pub use config::{Config, ConfigError, LoggingConfig, MetadataConfig, StatsConfig, StorageConfig};
pub use paths::{container_base_path, PathManager};
