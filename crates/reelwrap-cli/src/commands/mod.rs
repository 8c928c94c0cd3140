pub mod config;
pub mod history;
pub mod wrapped;

use color_eyre::eyre::{eyre, Result};
use std::path::PathBuf;
use watch_stats_config::{Config, PathManager};
use watch_stats_core::JsonHistoryStore;

/// Load and validate `config.toml`, falling back to defaults when it is absent
pub fn load_config(paths: &PathManager) -> Result<Config> {
    let config_file = paths.config_file();
    let config = Config::load_or_default(&config_file).map_err(|e| {
        eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })?;
    config.validate()?;
    Ok(config)
}

/// History store for a command, honoring a `--data-dir` override
pub fn open_store(config: &Config, paths: &PathManager, data_dir: Option<PathBuf>) -> JsonHistoryStore {
    let dir = data_dir.unwrap_or_else(|| config.history_dir(paths));
    JsonHistoryStore::new(dir)
}
