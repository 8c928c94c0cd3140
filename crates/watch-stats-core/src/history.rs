use chrono::{FixedOffset, NaiveDate};
use tracing::warn;
use watch_stats_models::{WatchedEpisode, WatchedMovie};

use crate::dates::{parse_watch_time, WatchTime};

#[derive(Debug, Clone, Copy)]
pub enum LoggedItem<'a> {
    Movie(&'a WatchedMovie),
    Episode(&'a WatchedEpisode),
}

impl LoggedItem<'_> {
    pub fn display_title(&self) -> String {
        match self {
            LoggedItem::Movie(movie) => movie.title.clone(),
            LoggedItem::Episode(episode) => episode.display_title(),
        }
    }
}

/// One movie or episode log with its position in the combined input.
///
/// Movies take indices `0..m` in input order and episodes follow at `m..m+e`.
/// The index is the tie-break key for every "first encountered" rule.
#[derive(Debug, Clone, Copy)]
pub struct LoggedEntry<'a> {
    pub index: usize,
    pub item: LoggedItem<'a>,
    pub watched: Option<WatchTime>,
}

/// Movies and episodes merged into one indexed, read-only view
#[derive(Debug, Clone)]
pub struct WatchLog<'a> {
    entries: Vec<LoggedEntry<'a>>,
}

impl<'a> WatchLog<'a> {
    pub fn new(
        movies: &'a [WatchedMovie],
        episodes: &'a [WatchedEpisode],
        offset: Option<FixedOffset>,
    ) -> Self {
        let movie_entries = movies.iter().map(|movie| {
            (LoggedItem::Movie(movie), movie.watched_date.as_str())
        });
        let episode_entries = episodes.iter().map(|episode| {
            (LoggedItem::Episode(episode), episode.watched_date.as_str())
        });

        let entries: Vec<LoggedEntry<'a>> = movie_entries
            .chain(episode_entries)
            .enumerate()
            .map(|(index, (item, raw))| LoggedEntry {
                index,
                item,
                watched: parse_watch_time(raw, offset),
            })
            .collect();

        let undated = entries.iter().filter(|entry| entry.watched.is_none()).count();
        if undated > 0 {
            warn!(
                "{} of {} watch entries have unparsable dates; leaving them out of date-based stats",
                undated,
                entries.len()
            );
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[LoggedEntry<'a>] {
        &self.entries
    }

    /// Entries with a usable date, in index order
    pub fn dated(&self) -> impl Iterator<Item = (&LoggedEntry<'a>, WatchTime)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.watched.map(|watched| (entry, watched)))
    }

    pub fn dated_count(&self) -> usize {
        self.dated().count()
    }

    /// Unique calendar dates, ascending
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.dated().map(|(_, watched)| watched.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }
}
