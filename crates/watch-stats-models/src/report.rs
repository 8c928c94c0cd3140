//! The wrapped report produced by the stats aggregator.
//!
//! Every group maps onto one card of the rendered summary. All values are
//! plain data so the report can be serialized as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::personality::PersonalityProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WrappedStats {
    pub volume: VolumeStats,
    pub ratings: RatingStats,
    pub genres: GenreStats,
    pub timeline: TimelineStats,
    pub tv: TvStats,
    pub movies: MovieStats,
    pub engagement: EngagementStats,
    pub personality: PersonalityProfile,
    /// Total watch time restated as an everyday comparison
    pub hours_equivalent: String,
    #[serde(default)]
    pub fun_facts: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VolumeStats {
    pub total_movies: usize,
    pub total_episodes: usize,
    pub total_entries: usize,
    /// Movie and episode runtime in hours, one decimal
    pub total_hours: f64,
    pub longest_movie: Option<MovieHighlight>,
    pub busiest_day: Option<DayCount>,
    pub busiest_month: Option<MonthCount>,
    /// Dated entries per week between the first and last watch date, one decimal
    pub avg_per_week: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieHighlight {
    pub id: u64,
    pub title: String,
    pub runtime: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthCount {
    /// `YYYY-MM`
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingStats {
    /// 1-10 scale
    pub avg_movie_rating: f64,
    /// 5-point scale
    pub avg_episode_rating: f64,
    /// Bucket (`"0.5"` through `"5"`) to count, movie ratings halved onto the 5-point scale
    pub rating_distribution: BTreeMap<String, usize>,
    pub highest_rated_movies: Vec<RatedMovie>,
    pub lowest_rated_movies: Vec<RatedMovie>,
    pub top_rated_shows: Vec<ShowRating>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatedMovie {
    pub id: u64,
    pub title: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowRating {
    pub show_id: u64,
    pub show_name: String,
    pub average_rating: f64,
    pub rated_episodes: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenreStats {
    pub top_genres: Vec<GenreCount>,
    pub distinct_genres: usize,
    /// Genres with at least two rated entries, by mean 5-point rating
    pub highest_rated_genres: Vec<GenreRating>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreRating {
    pub genre: String,
    pub average_rating: f64,
    pub rated_entries: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimelineStats {
    /// Longest run of consecutive calendar days with at least one entry
    pub longest_streak: u32,
    pub busiest_weekday: Option<String>,
    pub first_log: Option<LogMarker>,
    pub last_log: Option<LogMarker>,
    /// `YYYY-MM` to entry count; months without entries are absent
    pub monthly_activity: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogMarker {
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TvStats {
    pub distinct_shows: usize,
    pub top_shows: Vec<ShowCount>,
    pub fastest_binge: Option<BingeStat>,
    /// Distinct (show, season) pairs with at least one watched episode.
    ///
    /// A season counts as soon as one of its episodes is logged; this does
    /// not check that every episode of the season was watched.
    pub seasons_completed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowCount {
    pub show_id: u64,
    pub show_name: String,
    pub episodes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BingeStat {
    pub show_id: u64,
    pub show_name: String,
    pub episodes: usize,
    /// Days between the first and last episode, at least 1
    pub days: i64,
    pub episodes_per_day: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieStats {
    /// Decade start year (1990, 2000, ...) to movie count
    pub decades: BTreeMap<i32, usize>,
    pub oldest_movie: Option<MovieYear>,
    pub newest_movie: Option<MovieYear>,
    /// Minutes, over movies with a known runtime
    pub avg_runtime: u32,
    /// Viewings beyond the first for movies logged more than once
    pub rewatch_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieYear {
    pub id: u64,
    pub title: String,
    pub year: i32,
}

/// Likes, favorites, reviews and tags.
///
/// Only episode reviews are counted: movie entries carry no review text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngagementStats {
    pub liked_episodes: usize,
    pub total_favorites: usize,
    /// Liked episodes as a percentage of all entries, 0-100
    pub like_ratio: u32,
    pub review_count: usize,
    /// Characters per trimmed review, rounded
    pub avg_review_length: u32,
    pub top_tags: Vec<TagCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}
