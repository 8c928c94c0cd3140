//! Entry point of the wrapped report: one pure, synchronous pass over a
//! snapshot of the watch history.

use std::collections::HashSet;

use chrono::FixedOffset;
use tracing::{debug, instrument};
use watch_stats_models::{WatchedEpisode, WatchedMovie, WrappedStats};

use crate::engagement::engagement_stats;
use crate::fun_facts::{highlight_facts, hours_equivalent};
use crate::genres::genre_stats;
use crate::history::WatchLog;
use crate::movies::movie_stats;
use crate::personality::{classify, PersonalityInputs};
use crate::ratings::{combined_average, rating_stats};
use crate::timeline::timeline_stats;
use crate::tv::tv_stats;
use crate::volume::volume_stats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// Offset whose calendar is used for dates; `None` keeps each timestamp's own offset
    pub utc_offset: Option<FixedOffset>,
}

/// Compute the wrapped report with default options
pub fn compute(
    movies: &[WatchedMovie],
    episodes: &[WatchedEpisode],
    favorite_movie_ids: &HashSet<u64>,
    favorite_episode_ids: &HashSet<u64>,
) -> WrappedStats {
    compute_with(
        &StatsOptions::default(),
        movies,
        episodes,
        favorite_movie_ids,
        favorite_episode_ids,
    )
}

/// Compute the wrapped report.
///
/// Total over its inputs: empty or partially malformed histories produce a
/// report with zeroed counts and `None` highlights. Inputs are only read.
#[instrument(skip_all, fields(movies = movies.len(), episodes = episodes.len()))]
pub fn compute_with(
    options: &StatsOptions,
    movies: &[WatchedMovie],
    episodes: &[WatchedEpisode],
    favorite_movie_ids: &HashSet<u64>,
    favorite_episode_ids: &HashSet<u64>,
) -> WrappedStats {
    let log = WatchLog::new(movies, episodes, options.utc_offset);

    let volume = volume_stats(movies, episodes, &log);
    let ratings = rating_stats(movies, episodes);
    let genres = genre_stats(movies, episodes);
    let timeline = timeline_stats(&log);
    let tv = tv_stats(episodes, &log);
    let movie_summary = movie_stats(movies);
    let engagement = engagement_stats(
        movies.len(),
        episodes,
        favorite_movie_ids.len() + favorite_episode_ids.len(),
    );

    let personality = classify(&PersonalityInputs {
        total_movies: volume.total_movies,
        total_episodes: volume.total_episodes,
        total_entries: volume.total_entries,
        combined_average: combined_average(movies, episodes),
        distinct_genres: genres.distinct_genres,
        review_count: engagement.review_count,
        total_hours: volume.total_hours,
    });

    debug!(
        entries = volume.total_entries,
        hours = volume.total_hours,
        streak = timeline.longest_streak,
        personality = personality.label(),
        "Computed wrapped stats"
    );

    WrappedStats {
        hours_equivalent: hours_equivalent(volume.total_hours),
        fun_facts: highlight_facts(&timeline, &tv, &movie_summary),
        personality: personality.profile(),
        volume,
        ratings,
        genres,
        timeline,
        tv,
        movies: movie_summary,
        engagement,
    }
}
