use chrono::{Datelike, FixedOffset};
use watch_stats_models::{WatchedEpisode, WatchedMovie};

use crate::dates::parse_watch_time;

fn watched_in_year(raw: &str, year: i32, offset: Option<FixedOffset>) -> bool {
    parse_watch_time(raw, offset).map_or(false, |watched| watched.date.year() == year)
}

/// Keep only the entries whose calendar date falls in `year`.
///
/// Entries with unparsable dates cannot be placed in any year and are dropped.
pub fn filter_by_year(
    movies: &[WatchedMovie],
    episodes: &[WatchedEpisode],
    year: i32,
    offset: Option<FixedOffset>,
) -> (Vec<WatchedMovie>, Vec<WatchedEpisode>) {
    let movies = movies
        .iter()
        .filter(|movie| watched_in_year(&movie.watched_date, year, offset))
        .cloned()
        .collect();
    let episodes = episodes
        .iter()
        .filter(|episode| watched_in_year(&episode.watched_date, year, offset))
        .cloned()
        .collect();
    (movies, episodes)
}
