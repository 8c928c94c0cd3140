use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use watch_stats_models::{LogMarker, TimelineStats};

use crate::dates::{month_key, weekday_name};
use crate::history::WatchLog;
use crate::tally::Tally;

pub fn timeline_stats(log: &WatchLog<'_>) -> TimelineStats {
    let mut weekdays: Tally<Weekday> = Tally::new();
    let mut monthly_activity: BTreeMap<String, usize> = BTreeMap::new();
    for (_, watched) in log.dated() {
        weekdays.add(watched.date.weekday());
        *monthly_activity.entry(month_key(watched.date)).or_insert(0) += 1;
    }

    let first_log = log
        .dated()
        .min_by(|(a, a_time), (b, b_time)| {
            a_time.instant.cmp(&b_time.instant).then(a.index.cmp(&b.index))
        })
        .map(|(entry, watched)| LogMarker {
            title: entry.item.display_title(),
            date: watched.date,
        });
    let last_log = log
        .dated()
        .max_by(|(a, a_time), (b, b_time)| {
            a_time.instant.cmp(&b_time.instant).then(b.index.cmp(&a.index))
        })
        .map(|(entry, watched)| LogMarker {
            title: entry.item.display_title(),
            date: watched.date,
        });

    TimelineStats {
        longest_streak: longest_streak(&log.unique_dates()),
        busiest_weekday: weekdays
            .leader()
            .map(|(weekday, _)| weekday_name(weekday).to_string()),
        first_log,
        last_log,
        monthly_activity,
    }
}

/// Longest run of consecutive days in sorted, de-duplicated `dates`
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let Some(first) = dates.first() else {
        return 0;
    };

    let mut longest = 1;
    let mut current = 1;
    let mut previous = *first;
    for date in &dates[1..] {
        if (*date - previous).num_days() == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
        previous = *date;
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{episode, movie};
    use watch_stats_models::{WatchedEpisode, WatchedMovie};

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_streak_with_gap() {
        let dates: Vec<NaiveDate> = [1, 2, 3, 5, 6, 7, 8].into_iter().map(march).collect();
        assert_eq!(longest_streak(&dates), 4);
    }

    #[test]
    fn test_streak_edge_cases() {
        assert_eq!(longest_streak(&[]), 0);
        assert_eq!(longest_streak(&[march(9)]), 1);
        assert_eq!(longest_streak(&[march(1), march(3), march(5)]), 1);
    }

    #[test]
    fn test_streak_from_unsorted_log_with_same_day_entries() {
        let movies: Vec<WatchedMovie> = ["2024-03-03", "2024-03-01", "2024-03-02", "2024-03-02T23:00:00Z"]
            .iter()
            .enumerate()
            .map(|(i, date)| movie(i as u64, "M", date))
            .collect();
        let log = WatchLog::new(&movies, &[], None);
        assert_eq!(timeline_stats(&log).longest_streak, 3);
    }

    #[test]
    fn test_busiest_weekday() {
        // 2024-03-01 is a Friday, 2024-03-03 a Sunday
        let movies = vec![
            movie(1, "A", "2024-03-03"),
            movie(2, "B", "2024-03-01"),
            movie(3, "C", "2024-03-08"),
        ];
        let log = WatchLog::new(&movies, &[], None);
        assert_eq!(timeline_stats(&log).busiest_weekday.as_deref(), Some("Friday"));
    }

    #[test]
    fn test_busiest_weekday_tie_goes_to_first_encountered() {
        // Two Sundays and two Fridays; a Sunday is logged first
        let movies = vec![
            movie(1, "A", "2024-03-03"),
            movie(2, "B", "2024-03-01"),
            movie(3, "C", "2024-03-08"),
            movie(4, "D", "2024-03-10"),
        ];
        let log = WatchLog::new(&movies, &[], None);
        assert_eq!(timeline_stats(&log).busiest_weekday.as_deref(), Some("Sunday"));

        let fridays_first = vec![movies[1].clone(), movies[0].clone(), movies[2].clone(), movies[3].clone()];
        let log = WatchLog::new(&fridays_first, &[], None);
        assert_eq!(timeline_stats(&log).busiest_weekday.as_deref(), Some("Friday"));
    }

    #[test]
    fn test_first_and_last_log_ignore_input_order() {
        let movies = vec![
            movie(1, "Middle", "2024-02-01T20:00:00Z"),
            movie(2, "Broken", "last tuesday"),
        ];
        let episodes = vec![
            WatchedEpisode { season_number: 2, episode_number: 5, ..episode(9, 3, "Andor", "2024-06-01T21:00:00Z") },
            episode(10, 3, "Andor", "2024-01-15T21:00:00Z"),
        ];
        let log = WatchLog::new(&movies, &episodes, None);
        let timeline = timeline_stats(&log);

        let first = timeline.first_log.unwrap();
        assert_eq!(first.title, "Andor S01E10");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let last = timeline.last_log.unwrap();
        assert_eq!(last.title, "Andor S02E05");
    }

    #[test]
    fn test_same_instant_prefers_first_entry() {
        let movies = vec![
            movie(1, "Earlier in list", "2024-02-01T20:00:00Z"),
            movie(2, "Later in list", "2024-02-01T20:00:00Z"),
        ];
        let log = WatchLog::new(&movies, &[], None);
        let timeline = timeline_stats(&log);
        assert_eq!(timeline.first_log.unwrap().title, "Earlier in list");
        assert_eq!(timeline.last_log.unwrap().title, "Earlier in list");
    }

    #[test]
    fn test_monthly_activity_is_sparse() {
        let movies = vec![
            movie(1, "A", "2024-01-05"),
            movie(2, "B", "2024-03-05"),
            movie(3, "C", "2024-03-09"),
        ];
        let log = WatchLog::new(&movies, &[], None);
        let activity = timeline_stats(&log).monthly_activity;
        assert_eq!(activity.len(), 2);
        assert_eq!(activity.get("2024-01"), Some(&1));
        assert_eq!(activity.get("2024-02"), None);
        assert_eq!(activity.get("2024-03"), Some(&2));
    }
}
