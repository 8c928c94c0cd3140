use chrono::NaiveDate;
use watch_stats_models::{DayCount, MonthCount, MovieHighlight, VolumeStats, WatchedEpisode, WatchedMovie};

use crate::dates::month_key;
use crate::history::WatchLog;
use crate::numbers::round_to_tenth;
use crate::tally::Tally;

pub fn volume_stats(
    movies: &[WatchedMovie],
    episodes: &[WatchedEpisode],
    log: &WatchLog<'_>,
) -> VolumeStats {
    let mut days: Tally<NaiveDate> = Tally::new();
    let mut months: Tally<String> = Tally::new();
    for (_, watched) in log.dated() {
        days.add(watched.date);
        months.add(month_key(watched.date));
    }

    VolumeStats {
        total_movies: movies.len(),
        total_episodes: episodes.len(),
        total_entries: movies.len() + episodes.len(),
        total_hours: total_hours(movies, episodes),
        longest_movie: longest_movie(movies),
        busiest_day: days.leader().map(|(date, count)| DayCount { date, count }),
        busiest_month: months.leader().map(|(month, count)| MonthCount { month, count }),
        avg_per_week: average_per_week(log),
    }
}

pub fn total_hours(movies: &[WatchedMovie], episodes: &[WatchedEpisode]) -> f64 {
    let movie_minutes: u64 = movies.iter().map(|movie| u64::from(movie.runtime)).sum();
    let episode_minutes: u64 = episodes
        .iter()
        .map(|episode| u64::from(episode.runtime.unwrap_or(0)))
        .sum();
    round_to_tenth((movie_minutes + episode_minutes) as f64 / 60.0)
}

fn longest_movie(movies: &[WatchedMovie]) -> Option<MovieHighlight> {
    let mut longest: Option<&WatchedMovie> = None;
    for movie in movies.iter().filter(|movie| movie.runtime > 0) {
        // strict comparison keeps the first of equally long movies
        if longest.map_or(true, |current| movie.runtime > current.runtime) {
            longest = Some(movie);
        }
    }
    longest.map(|movie| MovieHighlight {
        id: movie.id,
        title: movie.title.clone(),
        runtime: movie.runtime,
    })
}

fn average_per_week(log: &WatchLog<'_>) -> f64 {
    let dated = log.dated_count();
    if dated < 2 {
        return 0.0;
    }
    let dates = log.unique_dates();
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return 0.0;
    };
    let weeks = ((*last - *first).num_days() as f64 / 7.0).max(1.0);
    round_to_tenth(dated as f64 / weeks)
}
