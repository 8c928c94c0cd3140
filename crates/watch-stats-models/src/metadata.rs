use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

/// One row of a search or trending listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaSummary {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Movie details needed to log a watch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
}

impl MediaDetails {
    /// Build a history entry from these details. Rating starts unrated.
    pub fn to_watched(&self, watched_date: impl Into<String>) -> crate::WatchedMovie {
        crate::WatchedMovie {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            rating: 0,
            watched_date: watched_date.into(),
            runtime: self.runtime,
            release_date: self.release_date.clone(),
            genres: self.genres.clone(),
            overview: self.overview.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MediaKind::Tv).unwrap();
        assert_eq!(json, "\"tv\"");
        assert_eq!(MediaKind::Movie.as_str(), "movie");
    }

    #[test]
    fn test_details_to_watched() {
        let details = MediaDetails {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/p.jpg".to_string()),
            backdrop_path: None,
            runtime: 136,
            release_date: "1999-03-31".to_string(),
            genres: vec!["Action".to_string()],
            overview: String::new(),
        };
        let watched = details.to_watched("2024-05-01T20:00:00Z");
        assert_eq!(watched.id, 603);
        assert_eq!(watched.runtime, 136);
        assert!(!watched.is_rated());
        assert_eq!(watched.release_year(), Some(1999));
    }
}
