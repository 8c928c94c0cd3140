use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Table};
use serde_json::json;
use std::path::PathBuf;
use watch_stats_config::{Config, PathManager};
use watch_stats_core::WatchHistoryStore;

pub async fn run_history(
    config: &Config,
    paths: &PathManager,
    data_dir: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let store = super::open_store(config, paths, data_dir);
    let snapshot = store
        .snapshot()
        .await
        .wrap_err_with(|| format!("Failed to read watch history from {}", store.data_dir().display()))?;

    let counts = [
        ("Watched movies", snapshot.movies.len()),
        ("Watched episodes", snapshot.episodes.len()),
        ("Favorite movies", snapshot.favorites.movie_ids.len()),
        ("Favorite episodes", snapshot.favorites.episode_ids.len()),
    ];

    if !output.is_human() {
        output.data(&json!({
            "data_dir": store.data_dir().display().to_string(),
            "movies": snapshot.movies.len(),
            "episodes": snapshot.episodes.len(),
            "favorite_movies": snapshot.favorites.movie_ids.len(),
            "favorite_episodes": snapshot.favorites.episode_ids.len(),
        }))?;
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("History").add_attribute(Attribute::Bold),
        Cell::new(store.data_dir().display().to_string()),
    ]);
    for (label, count) in counts {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
    Ok(())
}
