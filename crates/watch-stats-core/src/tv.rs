use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use watch_stats_models::{BingeStat, ShowCount, TvStats, WatchedEpisode};

use crate::history::{LoggedItem, WatchLog};
use crate::numbers::round_to_tenth;
use crate::tally::Tally;

const TOP_SHOWS: usize = 5;
const MIN_BINGE_EPISODES: usize = 3;

pub fn tv_stats(episodes: &[WatchedEpisode], log: &WatchLog<'_>) -> TvStats {
    let mut shows: Tally<u64> = Tally::new();
    let mut names: HashMap<u64, &str> = HashMap::new();
    let mut seasons: HashSet<(u64, u32)> = HashSet::new();
    for episode in episodes {
        shows.add(episode.show_id);
        names.entry(episode.show_id).or_insert(episode.show_name.as_str());
        seasons.insert((episode.show_id, episode.season_number));
    }

    let show_name = |show_id: u64| names.get(&show_id).copied().unwrap_or_default().to_string();

    TvStats {
        distinct_shows: shows.len(),
        top_shows: shows
            .top(TOP_SHOWS)
            .into_iter()
            .map(|(show_id, episodes)| ShowCount {
                show_id,
                show_name: show_name(show_id),
                episodes,
            })
            .collect(),
        fastest_binge: fastest_binge(&shows, log).map(|binge| BingeStat {
            show_name: show_name(binge.show_id),
            ..binge
        }),
        seasons_completed: seasons.len(),
    }
}

/// The show with the most episodes per day between its first and last dated
/// episode. Shows need at least three dated episodes; the span is at least one day.
fn fastest_binge(shows: &Tally<u64>, log: &WatchLog<'_>) -> Option<BingeStat> {
    let mut dates_by_show: HashMap<u64, Vec<NaiveDate>> = HashMap::new();
    for (entry, watched) in log.dated() {
        if let LoggedItem::Episode(episode) = entry.item {
            dates_by_show.entry(episode.show_id).or_default().push(watched.date);
        }
    }

    let mut best: Option<BingeStat> = None;
    for (show_id, _) in shows.in_first_seen_order() {
        let Some(dates) = dates_by_show.get(&show_id) else {
            continue;
        };
        if dates.len() < MIN_BINGE_EPISODES {
            continue;
        }
        let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
            continue;
        };
        let days = (*last - *first).num_days().max(1);
        let rate = dates.len() as f64 / days as f64;

        // strict comparison keeps the first show on equal rates
        if best.as_ref().map_or(true, |current| rate > current.episodes_per_day) {
            best = Some(BingeStat {
                show_id,
                show_name: String::new(),
                episodes: dates.len(),
                days,
                episodes_per_day: rate,
            });
        }
    }

    best.map(|binge| BingeStat {
        episodes_per_day: round_to_tenth(binge.episodes_per_day),
        ..binge
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::episode;

    fn run(episodes: &[WatchedEpisode]) -> TvStats {
        let log = WatchLog::new(&[], episodes, None);
        tv_stats(episodes, &log)
    }

    fn show_over_days(show_id: u64, name: &str, first_id: u64, days: &[u32]) -> Vec<WatchedEpisode> {
        days.iter()
            .enumerate()
            .map(|(i, day)| {
                episode(first_id + i as u64, show_id, name, &format!("2024-04-{:02}T20:00:00Z", day))
            })
            .collect()
    }

    #[test]
    fn test_binge_rate_beats_raw_volume() {
        // A: 10 episodes across ten days; B: 5 episodes across two days
        let mut episodes = show_over_days(1, "Show A", 100, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        episodes.extend(show_over_days(2, "Show B", 200, &[12, 13, 13, 14, 14]));

        let stats = run(&episodes);
        let binge = stats.fastest_binge.unwrap();
        assert_eq!(binge.show_name, "Show B");
        assert_eq!(binge.episodes, 5);
        assert_eq!(binge.days, 2);
        assert_eq!(binge.episodes_per_day, 2.5);

        assert_eq!(stats.top_shows[0].show_name, "Show A");
        assert_eq!(stats.top_shows[0].episodes, 10);
    }

    #[test]
    fn test_binge_needs_three_episodes() {
        let episodes = show_over_days(1, "Short", 1, &[1, 1]);
        assert!(run(&episodes).fastest_binge.is_none());
    }

    #[test]
    fn test_binge_same_day_counts_as_one_day() {
        let episodes = show_over_days(1, "Marathon", 1, &[3, 3, 3, 3]);
        let binge = run(&episodes).fastest_binge.unwrap();
        assert_eq!(binge.days, 1);
        assert_eq!(binge.episodes_per_day, 4.0);
    }

    #[test]
    fn test_binge_tie_favors_first_show() {
        let mut episodes = show_over_days(1, "First", 1, &[1, 2, 3]);
        episodes.extend(show_over_days(2, "Second", 10, &[5, 6, 7]));
        assert_eq!(run(&episodes).fastest_binge.unwrap().show_name, "First");
    }

    #[test]
    fn test_binge_skips_undated_episodes() {
        let mut episodes = show_over_days(1, "Partly dated", 1, &[1, 2]);
        episodes.push(episode(3, 1, "Partly dated", "unknown"));
        assert!(run(&episodes).fastest_binge.is_none());
    }

    #[test]
    fn test_distinct_shows_and_seasons_touched() {
        let episodes = vec![
            episode(1, 1, "Dark", "2024-01-01"),
            WatchedEpisode { season_number: 2, ..episode(2, 1, "Dark", "2024-01-02") },
            episode(3, 1, "Dark", "2024-01-03"),
            episode(4, 2, "Fargo", "2024-01-04"),
        ];
        let stats = run(&episodes);
        assert_eq!(stats.distinct_shows, 2);
        assert_eq!(stats.seasons_completed, 3);
        assert_eq!(stats.top_shows[0].show_name, "Dark");
        assert_eq!(stats.top_shows[0].episodes, 3);
    }
}
