use serde::{Deserialize, Serialize};

/// A watched TV episode.
///
/// Episodes are keyed by `id`: marking the same episode again replaces the
/// existing entry instead of adding a rewatch entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEpisode {
    pub id: u64,
    pub show_id: u64,
    pub show_name: String,
    #[serde(default)]
    pub episode_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub still_path: Option<String>,
    pub season_number: u32,
    pub episode_number: u32,
    /// 0.5-5 in half steps, or 0 when unrated
    #[serde(default)]
    pub rating: f64,
    /// ISO 8601 timestamp of the viewing
    pub watched_date: String,
    #[serde(default)]
    pub liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_rewatch: bool,
    #[serde(default)]
    pub no_spoilers: bool,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl WatchedEpisode {
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }

    /// Review text with surrounding whitespace removed, if any remains
    pub fn trimmed_review(&self) -> Option<&str> {
        self.review
            .as_deref()
            .map(str::trim)
            .filter(|review| !review.is_empty())
    }

    /// Label used when the episode is shown on its own, e.g. `Severance S01E03`
    pub fn display_title(&self) -> String {
        format!(
            "{} S{:02}E{:02}",
            self.show_name, self.season_number, self.episode_number
        )
    }

    pub fn genre_list(&self) -> &[String] {
        self.genres.as_deref().unwrap_or(&[])
    }

    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_helpers() {
        let json = r#"{
            "id": 7,
            "show_id": 100,
            "show_name": "Severance",
            "season_number": 1,
            "episode_number": 3,
            "watched_date": "2024-02-10T22:00:00Z",
            "review": "   "
        }"#;
        let episode: WatchedEpisode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.display_title(), "Severance S01E03");
        assert_eq!(episode.trimmed_review(), None);
        assert!(episode.genre_list().is_empty());
        assert!(episode.tag_list().is_empty());
        assert!(!episode.is_rated());
    }

    #[test]
    fn test_trimmed_review() {
        let mut episode: WatchedEpisode = serde_json::from_str(
            r#"{"id":1,"show_id":2,"show_name":"Dark","season_number":1,"episode_number":1,"watched_date":"2024-01-01"}"#,
        )
        .unwrap();
        episode.review = Some("  great cliffhanger \n".to_string());
        assert_eq!(episode.trimmed_review(), Some("great cliffhanger"));
    }
}
