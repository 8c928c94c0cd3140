use std::collections::{BTreeMap, HashMap};

use watch_stats_models::{MovieStats, MovieYear, WatchedMovie};

pub fn movie_stats(movies: &[WatchedMovie]) -> MovieStats {
    let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
    let mut oldest: Option<(i32, &WatchedMovie)> = None;
    let mut newest: Option<(i32, &WatchedMovie)> = None;

    for movie in movies {
        let Some(year) = movie.release_year() else {
            continue;
        };
        *decades.entry(year - year.rem_euclid(10)).or_insert(0) += 1;

        if oldest.map_or(true, |(oldest_year, _)| year < oldest_year) {
            oldest = Some((year, movie));
        }
        if newest.map_or(true, |(newest_year, _)| year > newest_year) {
            newest = Some((year, movie));
        }
    }

    let to_movie_year = |(year, movie): (i32, &WatchedMovie)| MovieYear {
        id: movie.id,
        title: movie.title.clone(),
        year,
    };

    MovieStats {
        decades,
        oldest_movie: oldest.map(to_movie_year),
        newest_movie: newest.map(to_movie_year),
        avg_runtime: average_runtime(movies),
        rewatch_count: rewatch_count(movies),
    }
}

fn average_runtime(movies: &[WatchedMovie]) -> u32 {
    let runtimes: Vec<u64> = movies
        .iter()
        .filter(|movie| movie.runtime > 0)
        .map(|movie| u64::from(movie.runtime))
        .collect();
    if runtimes.is_empty() {
        return 0;
    }
    (runtimes.iter().sum::<u64>() as f64 / runtimes.len() as f64).round() as u32
}

/// Viewings beyond the first, summed over every movie id logged more than once
pub fn rewatch_count(movies: &[WatchedMovie]) -> usize {
    let mut viewings: HashMap<u64, usize> = HashMap::new();
    for movie in movies {
        *viewings.entry(movie.id).or_insert(0) += 1;
    }
    viewings.values().map(|count| count - 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::movie;

    fn released(id: u64, title: &str, release_date: &str) -> WatchedMovie {
        WatchedMovie {
            release_date: release_date.to_string(),
            ..movie(id, title, "2024-01-01")
        }
    }

    #[test]
    fn test_rewatch_accounting() {
        let movies = vec![
            movie(1, "Repeat", "2024-01-01"),
            movie(2, "Once", "2024-01-02"),
            movie(1, "Repeat", "2024-02-01"),
            movie(3, "Also once", "2024-02-03"),
            movie(1, "Repeat", "2024-03-01"),
        ];
        assert_eq!(rewatch_count(&movies), 2);
        assert_eq!(rewatch_count(&[]), 0);
    }

    #[test]
    fn test_decades_and_release_extremes() {
        let movies = vec![
            released(1, "Vertigo", "1958-05-09"),
            released(2, "Heat", "1995-12-15"),
            released(3, "Psycho", "1960-06-16"),
            released(4, "Unknown", ""),
            released(5, "Dune", "2021-10-22"),
            released(6, "Casino", "1995-11-22"),
        ];
        let stats = movie_stats(&movies);
        assert_eq!(stats.decades.get(&1950), Some(&1));
        assert_eq!(stats.decades.get(&1960), Some(&1));
        assert_eq!(stats.decades.get(&1990), Some(&2));
        assert_eq!(stats.decades.get(&2020), Some(&1));
        assert_eq!(stats.decades.values().sum::<usize>(), 5);

        let oldest = stats.oldest_movie.unwrap();
        assert_eq!((oldest.title.as_str(), oldest.year), ("Vertigo", 1958));
        let newest = stats.newest_movie.unwrap();
        assert_eq!((newest.title.as_str(), newest.year), ("Dune", 2021));
    }

    #[test]
    fn test_release_year_tie_keeps_first() {
        let movies = vec![released(1, "Heat", "1995-12-15"), released(2, "Casino", "1995-11-22")];
        let stats = movie_stats(&movies);
        assert_eq!(stats.oldest_movie.unwrap().title, "Heat");
        assert_eq!(stats.newest_movie.unwrap().title, "Heat");
    }

    #[test]
    fn test_average_runtime_skips_unknown() {
        let movies = vec![
            WatchedMovie { runtime: 100, ..movie(1, "A", "2024-01-01") },
            WatchedMovie { runtime: 0, ..movie(2, "B", "2024-01-01") },
            WatchedMovie { runtime: 125, ..movie(3, "C", "2024-01-01") },
        ];
        // 112.5 rounds up
        assert_eq!(movie_stats(&movies).avg_runtime, 113);
    }
}
