use watch_stats_models::{EngagementStats, TagCount, WatchedEpisode};

use crate::tally::Tally;

const TOP_TAGS: usize = 10;

/// Likes, favorites, reviews and tags. Movie entries carry no reviews, so
/// only episodes feed the review numbers.
pub fn engagement_stats(
    total_movies: usize,
    episodes: &[WatchedEpisode],
    total_favorites: usize,
) -> EngagementStats {
    let total_entries = total_movies + episodes.len();
    let liked_episodes = episodes.iter().filter(|episode| episode.liked).count();

    let review_lengths: Vec<usize> = episodes
        .iter()
        .filter_map(|episode| episode.trimmed_review())
        .map(|review| review.chars().count())
        .collect();
    let avg_review_length = if review_lengths.is_empty() {
        0
    } else {
        (review_lengths.iter().sum::<usize>() as f64 / review_lengths.len() as f64).round() as u32
    };

    let mut tags: Tally<String> = Tally::new();
    for tag in episodes.iter().flat_map(|episode| episode.tag_list()) {
        let tag = tag.trim();
        if !tag.is_empty() {
            tags.add(tag.to_string());
        }
    }

    EngagementStats {
        liked_episodes,
        total_favorites,
        like_ratio: like_ratio(liked_episodes, total_entries),
        review_count: review_lengths.len(),
        avg_review_length,
        top_tags: tags
            .top(TOP_TAGS)
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect(),
    }
}

/// Liked entries as a whole percentage of all entries, clamped to 0-100
pub fn like_ratio(liked: usize, total_entries: usize) -> u32 {
    if total_entries == 0 {
        return 0;
    }
    let percent = (liked as f64 * 100.0 / total_entries as f64).round();
    percent.clamp(0.0, 100.0) as u32
}
