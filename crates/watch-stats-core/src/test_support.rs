use watch_stats_models::{WatchedEpisode, WatchedMovie};

pub fn movie(id: u64, title: &str, watched_date: &str) -> WatchedMovie {
    WatchedMovie {
        id,
        title: title.to_string(),
        poster_path: None,
        backdrop_path: None,
        rating: 0,
        watched_date: watched_date.to_string(),
        runtime: 0,
        release_date: String::new(),
        genres: Vec::new(),
        overview: String::new(),
    }
}

pub fn episode(id: u64, show_id: u64, show_name: &str, watched_date: &str) -> WatchedEpisode {
    WatchedEpisode {
        id,
        show_id,
        show_name: show_name.to_string(),
        episode_name: format!("Episode {}", id),
        still_path: None,
        season_number: 1,
        episode_number: id as u32,
        rating: 0.0,
        watched_date: watched_date.to_string(),
        liked: false,
        review: None,
        tags: None,
        is_rewatch: false,
        no_spoilers: false,
        runtime: None,
        genres: None,
    }
}

pub fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
