use watch_stats_models::{GenreCount, GenreRating, GenreStats, WatchedEpisode, WatchedMovie};

use crate::numbers::round_to_tenth;
use crate::tally::{RatingTally, Tally};

const TOP_GENRES: usize = 10;
const TOP_RATED_GENRES: usize = 5;
const MIN_RATED_ENTRIES: usize = 2;

fn clean(genre: &str) -> Option<String> {
    let genre = genre.trim();
    (!genre.is_empty()).then(|| genre.to_string())
}

pub fn genre_stats(movies: &[WatchedMovie], episodes: &[WatchedEpisode]) -> GenreStats {
    let mut counts: Tally<String> = Tally::new();
    let mut ratings: RatingTally<String> = RatingTally::new();

    for movie in movies {
        for genre in movie.genres.iter().filter_map(|genre| clean(genre)) {
            if movie.is_rated() {
                ratings.add(genre.clone(), f64::from(movie.rating) / 2.0);
            }
            counts.add(genre);
        }
    }
    for episode in episodes {
        for genre in episode.genre_list().iter().filter_map(|genre| clean(genre)) {
            if episode.is_rated() {
                ratings.add(genre.clone(), episode.rating);
            }
            counts.add(genre);
        }
    }

    GenreStats {
        top_genres: counts
            .top(TOP_GENRES)
            .into_iter()
            .map(|(genre, count)| GenreCount { genre, count })
            .collect(),
        distinct_genres: counts.len(),
        highest_rated_genres: ratings
            .ranked_by_mean(MIN_RATED_ENTRIES)
            .into_iter()
            .take(TOP_RATED_GENRES)
            .map(|row| GenreRating {
                genre: row.key,
                average_rating: round_to_tenth(row.mean),
                rated_entries: row.count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{episode, genres, movie};

    #[test]
    fn test_counts_combine_movies_and_episodes() {
        let movies = vec![
            WatchedMovie { genres: genres(&["Drama", "Crime"]), ..movie(1, "A", "2024-01-01") },
            WatchedMovie { genres: genres(&["Comedy"]), ..movie(2, "B", "2024-01-02") },
        ];
        let episodes = vec![WatchedEpisode {
            genres: Some(genres(&["Comedy", " ", "Drama"])),
            ..episode(1, 9, "Show", "2024-01-03")
        }];

        let stats = genre_stats(&movies, &episodes);
        assert_eq!(stats.distinct_genres, 3);
        let top: Vec<_> = stats.top_genres.iter().map(|g| (g.genre.as_str(), g.count)).collect();
        assert_eq!(top, vec![("Drama", 2), ("Comedy", 2), ("Crime", 1)]);
    }

    #[test]
    fn test_top_genres_capped_at_ten() {
        let names: Vec<String> = (0..12).map(|i| format!("Genre {}", i)).collect();
        let movies = vec![WatchedMovie { genres: names, ..movie(1, "A", "2024-01-01") }];
        let stats = genre_stats(&movies, &[]);
        assert_eq!(stats.top_genres.len(), 10);
        assert_eq!(stats.distinct_genres, 12);
    }

    #[test]
    fn test_highest_rated_genre_differs_from_most_watched() {
        let movies = vec![
            WatchedMovie { rating: 4, genres: genres(&["Action"]), ..movie(1, "A", "2024-01-01") },
            WatchedMovie { rating: 6, genres: genres(&["Action"]), ..movie(2, "B", "2024-01-02") },
            WatchedMovie { rating: 2, genres: genres(&["Action"]), ..movie(3, "C", "2024-01-03") },
            WatchedMovie { rating: 10, genres: genres(&["Documentary"]), ..movie(4, "D", "2024-01-04") },
            WatchedMovie { rating: 0, genres: genres(&["Horror"]), ..movie(5, "E", "2024-01-05") },
        ];
        let episodes = vec![WatchedEpisode {
            rating: 4.5,
            genres: Some(genres(&["Documentary"])),
            ..episode(1, 9, "Planet", "2024-01-06")
        }];

        let stats = genre_stats(&movies, &episodes);
        assert_eq!(stats.top_genres[0].genre, "Action");

        let rated = &stats.highest_rated_genres;
        assert_eq!(rated.len(), 2);
        assert_eq!(rated[0].genre, "Documentary");
        assert_eq!(rated[0].average_rating, 4.8);
        assert_eq!(rated[0].rated_entries, 2);
        assert_eq!(rated[1].genre, "Action");
        assert_eq!(rated[1].average_rating, 2.0);
    }
}
