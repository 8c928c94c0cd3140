use serde::{Deserialize, Serialize};

/// A single movie viewing.
///
/// Rewatches are logged as separate entries sharing the same `id` with a
/// fresh `watched_date`, so `(id, watched_date)` identifies an entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedMovie {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// 1-10, or 0 when unrated
    #[serde(default)]
    pub rating: u8,
    /// ISO 8601 timestamp of the viewing
    pub watched_date: String,
    /// Minutes
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
}

impl WatchedMovie {
    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    /// Release year taken from the leading `YYYY` of `release_date`
    pub fn release_year(&self) -> Option<i32> {
        let year = self.release_date.get(..4)?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        year.parse().ok()
    }
}
