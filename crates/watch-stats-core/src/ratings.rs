use std::collections::{BTreeMap, HashMap};

use watch_stats_models::{RatedMovie, RatingStats, ShowRating, WatchedEpisode, WatchedMovie};

use crate::numbers::{mean_or_zero, round_to_half, round_to_tenth};
use crate::tally::RatingTally;

const HIGHLIGHT_LIMIT: usize = 5;

/// Movie rating (1-10) on the 5-point scale, rounded to the nearest half star
pub fn normalize_movie_rating(rating: u8) -> f64 {
    round_to_half(f64::from(rating) / 2.0)
}

/// Histogram key for a 5-point rating: `"4"` for 4.0, `"3.5"` for 3.5
pub fn bucket_key(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{}", rating as u32)
    } else {
        format!("{:.1}", rating)
    }
}

/// All ten half-star buckets from 0.5 to 5, each at zero
fn empty_distribution() -> BTreeMap<String, usize> {
    (1..=10)
        .map(|half_steps| (bucket_key(f64::from(half_steps) / 2.0), 0))
        .collect()
}

pub fn rating_stats(movies: &[WatchedMovie], episodes: &[WatchedEpisode]) -> RatingStats {
    RatingStats {
        avg_movie_rating: average_movie_rating(movies),
        avg_episode_rating: average_episode_rating(episodes),
        rating_distribution: rating_distribution(movies, episodes),
        highest_rated_movies: highest_rated_movies(movies),
        lowest_rated_movies: lowest_rated_movies(movies),
        top_rated_shows: top_rated_shows(episodes),
    }
}

fn average_movie_rating(movies: &[WatchedMovie]) -> f64 {
    let rated: Vec<f64> = movies
        .iter()
        .filter(|movie| movie.is_rated())
        .map(|movie| f64::from(movie.rating))
        .collect();
    round_to_tenth(mean_or_zero(rated.iter().sum(), rated.len()))
}

fn average_episode_rating(episodes: &[WatchedEpisode]) -> f64 {
    let rated: Vec<f64> = episodes
        .iter()
        .filter(|episode| episode.is_rated())
        .map(|episode| episode.rating)
        .collect();
    round_to_tenth(mean_or_zero(rated.iter().sum(), rated.len()))
}

/// Mean over every rated movie (halved) and rated episode on the 5-point scale.
///
/// `None` when nothing is rated.
pub fn combined_average(movies: &[WatchedMovie], episodes: &[WatchedEpisode]) -> Option<f64> {
    let movie_ratings = movies
        .iter()
        .filter(|movie| movie.is_rated())
        .map(|movie| f64::from(movie.rating) / 2.0);
    let episode_ratings = episodes
        .iter()
        .filter(|episode| episode.is_rated())
        .map(|episode| episode.rating);

    let (total, count) = movie_ratings
        .chain(episode_ratings)
        .fold((0.0, 0usize), |(total, count), rating| (total + rating, count + 1));
    (count > 0).then(|| total / count as f64)
}

pub fn rating_distribution(
    movies: &[WatchedMovie],
    episodes: &[WatchedEpisode],
) -> BTreeMap<String, usize> {
    let mut distribution = empty_distribution();
    let movie_ratings = movies
        .iter()
        .filter(|movie| movie.is_rated())
        .map(|movie| normalize_movie_rating(movie.rating));
    let episode_ratings = episodes
        .iter()
        .filter(|episode| episode.is_rated())
        .map(|episode| round_to_half(episode.rating));

    for rating in movie_ratings.chain(episode_ratings) {
        // out-of-range ratings have no bucket
        if let Some(count) = distribution.get_mut(&bucket_key(rating)) {
            *count += 1;
        }
    }
    distribution
}

/// Rated movies, highest first; equal ratings keep input order
fn rated_movies_descending(movies: &[WatchedMovie]) -> Vec<(usize, &WatchedMovie)> {
    let mut rated: Vec<(usize, &WatchedMovie)> = movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| movie.is_rated())
        .collect();
    rated.sort_by(|(index_a, a), (index_b, b)| {
        b.rating.cmp(&a.rating).then(index_a.cmp(index_b))
    });
    rated
}

fn to_rated_movie(movie: &WatchedMovie) -> RatedMovie {
    RatedMovie {
        id: movie.id,
        title: movie.title.clone(),
        rating: movie.rating,
        poster_path: movie.poster_path.clone(),
    }
}

fn highest_rated_movies(movies: &[WatchedMovie]) -> Vec<RatedMovie> {
    rated_movies_descending(movies)
        .into_iter()
        .take(HIGHLIGHT_LIMIT)
        .map(|(_, movie)| to_rated_movie(movie))
        .collect()
}

/// Tail of the descending order, reversed. With fewer than five rated movies
/// this overlaps the highest-rated list.
fn lowest_rated_movies(movies: &[WatchedMovie]) -> Vec<RatedMovie> {
    let sorted = rated_movies_descending(movies);
    let start = sorted.len().saturating_sub(HIGHLIGHT_LIMIT);
    sorted[start..]
        .iter()
        .rev()
        .map(|(_, movie)| to_rated_movie(movie))
        .collect()
}

fn top_rated_shows(episodes: &[WatchedEpisode]) -> Vec<ShowRating> {
    let mut tally = RatingTally::new();
    let mut names: HashMap<u64, &str> = HashMap::new();
    for episode in episodes.iter().filter(|episode| episode.is_rated()) {
        tally.add(episode.show_id, episode.rating);
        names.entry(episode.show_id).or_insert(episode.show_name.as_str());
    }

    tally
        .ranked_by_mean(1)
        .into_iter()
        .take(HIGHLIGHT_LIMIT)
        .map(|row| ShowRating {
            show_id: row.key,
            show_name: names.get(&row.key).copied().unwrap_or_default().to_string(),
            average_rating: round_to_tenth(row.mean),
            rated_episodes: row.count,
        })
        .collect()
}
