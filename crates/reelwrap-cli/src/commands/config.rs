use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use serde_json::json;
use watch_stats_config::{Config, PathManager};

pub fn run_config(
    cmd: ConfigCommands,
    config: &Config,
    paths: &PathManager,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config, paths, output),
        ConfigCommands::Init { force } => init_config(paths, force, output),
        ConfigCommands::Path => {
            let file = paths.config_file();
            if output.is_human() {
                println!("{}", file.display());
            } else {
                output.data(&json!({ "config_file": file.display().to_string() }))?;
            }
            Ok(())
        }
    }
}

fn show_config(config: &Config, paths: &PathManager, output: &Output) -> Result<()> {
    let config_file = paths.config_file();

    if !output.is_human() {
        output.data(&json!({
            "config_file": config_file.display().to_string(),
            "exists": config_file.exists(),
            "config": config,
        }))?;
        return Ok(());
    }
    if output.is_quiet() {
        return Ok(());
    }

    output.banner("Configuration");
    if !config_file.exists() {
        output.warn(format!(
            "No configuration file at {}; showing defaults. Run 'reelwrap config init' to create one.",
            config_file.display()
        ));
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    for (key, value) in settings_rows(config, paths) {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
    Ok(())
}

fn settings_rows(config: &Config, paths: &PathManager) -> Vec<(&'static str, String)> {
    let offset = match config.stats.utc_offset_minutes {
        Some(minutes) => format!("{:+} min", minutes),
        None => "per timestamp".to_string(),
    };
    let log_json = match config.logging.json {
        Some(true) => "on",
        Some(false) => "off",
        None => "auto",
    };
    vec![
        ("storage.data_dir", config.history_dir(paths).display().to_string()),
        ("stats.utc_offset_minutes", offset),
        ("metadata.cache_ttl_seconds", config.metadata.cache_ttl_seconds.to_string()),
        ("metadata.cache_capacity", config.metadata.cache_capacity.to_string()),
        (
            "metadata.max_concurrent_requests",
            config.metadata.max_concurrent_requests.to_string(),
        ),
        ("logging.level", config.logging.level.clone()),
        ("logging.json", log_json.to_string()),
        (
            "logging.file",
            config
                .logging
                .file
                .as_ref()
                .map(|f| f.display().to_string())
                .unwrap_or_else(|| "stderr".to_string()),
        ),
    ]
}

fn init_config(paths: &PathManager, force: bool, output: &Output) -> Result<()> {
    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", paths.config_dir().display(), e))?;

    let config_file = paths.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write {}: {}", config_file.display(), e))?;
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}
