use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use watch_stats_models::{Favorites, WatchedEpisode, WatchedMovie, WrappedStats};

use crate::aggregator::{compute_with, StatsOptions};

pub const MOVIES: &str = "movies";
pub const EPISODES: &str = "episodes";
pub const FAVORITE_MOVIES: &str = "favorite_movies";
pub const FAVORITE_EPISODES: &str = "favorite_episodes";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection '{name}' is not valid JSON: {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize collection '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the aggregator needs, read at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    pub movies: Vec<WatchedMovie>,
    pub episodes: Vec<WatchedEpisode>,
    pub favorites: Favorites,
}

impl HistorySnapshot {
    pub fn wrapped(&self, options: &StatsOptions) -> WrappedStats {
        compute_with(
            options,
            &self.movies,
            &self.episodes,
            &self.favorites.movie_ids,
            &self.favorites.episode_ids,
        )
    }
}

/// Read side of the watch history, as seen by the stats aggregator
#[async_trait]
pub trait WatchHistoryStore: Send + Sync {
    async fn watched_movies(&self) -> Result<Vec<WatchedMovie>, StoreError>;
    async fn watched_episodes(&self) -> Result<Vec<WatchedEpisode>, StoreError>;
    async fn favorite_movie_ids(&self) -> Result<HashSet<u64>, StoreError>;
    async fn favorite_episode_ids(&self) -> Result<HashSet<u64>, StoreError>;

    /// Fetch all four collections concurrently
    async fn snapshot(&self) -> Result<HistorySnapshot, StoreError> {
        let (movies, episodes, movie_ids, episode_ids) = futures::try_join!(
            self.watched_movies(),
            self.watched_episodes(),
            self.favorite_movie_ids(),
            self.favorite_episode_ids(),
        )?;
        Ok(HistorySnapshot {
            movies,
            episodes,
            favorites: Favorites {
                movie_ids,
                episode_ids,
            },
        })
    }
}

/// Watch history kept as named JSON collections (`<name>.json`) in one directory.
///
/// A missing collection reads as empty. Unreadable JSON is reported, never
/// deleted, since it is the user's only copy. Each write lands in a temp
/// file that is renamed over the collection, so a failed write leaves the
/// previous contents intact. Writes are read-modify-write without locking;
/// use one writer at a time.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    data_dir: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }

    pub async fn get<T>(&self, name: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.collection_path(name);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Collection {} not found at {:?}, treating as empty", name, path);
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<T>>(&content) {
            Ok(items) => {
                debug!("Loaded {} ({} items)", name, items.len());
                Ok(items)
            }
            Err(source) => {
                warn!("Collection {} at {:?} could not be parsed: {}", name, path, source);
                Err(StoreError::Corrupt {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }

    pub async fn set<T>(&self, name: &str, items: &[T]) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let path = self.collection_path(name);
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        let json = serde_json::to_string_pretty(items).map_err(|source| StoreError::Serialize {
            name: name.to_string(),
            source,
        })?;

        // Write to a sibling temp file, then rename over the collection
        let temp_path = self.data_dir.join(format!("{}.json.tmp", name));
        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: temp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|source| StoreError::Io { path, source })?;
        debug!("Saved {} ({} items)", name, items.len());
        Ok(())
    }

    /// Delete a collection; returns whether it existed
    pub async fn remove(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.collection_path(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("Removed collection {}", name);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// Append a viewing; watching a movie again adds another entry
    pub async fn log_movie(&self, movie: WatchedMovie) -> Result<(), StoreError> {
        let mut movies: Vec<WatchedMovie> = self.get(MOVIES).await?;
        info!("Logging movie {} ({}) watched {}", movie.title, movie.id, movie.watched_date);
        movies.push(movie);
        self.set(MOVIES, &movies).await
    }

    /// Remove the viewing identified by movie id and watch date
    pub async fn remove_movie_entry(&self, id: u64, watched_date: &str) -> Result<bool, StoreError> {
        let mut movies: Vec<WatchedMovie> = self.get(MOVIES).await?;
        let before = movies.len();
        movies.retain(|movie| !(movie.id == id && movie.watched_date == watched_date));
        if movies.len() == before {
            return Ok(false);
        }
        self.set(MOVIES, &movies).await?;
        Ok(true)
    }

    /// Record an episode, replacing any existing entry with the same episode id
    pub async fn mark_episode(&self, episode: WatchedEpisode) -> Result<(), StoreError> {
        let mut episodes: Vec<WatchedEpisode> = self.get(EPISODES).await?;
        match episodes.iter_mut().find(|existing| existing.id == episode.id) {
            Some(existing) => {
                debug!("Replacing episode {} of show {}", episode.id, episode.show_id);
                *existing = episode;
            }
            None => {
                info!("Marking episode {} of {} as watched", episode.id, episode.show_name);
                episodes.push(episode);
            }
        }
        self.set(EPISODES, &episodes).await
    }

    pub async fn remove_episode(&self, id: u64) -> Result<bool, StoreError> {
        let mut episodes: Vec<WatchedEpisode> = self.get(EPISODES).await?;
        let before = episodes.len();
        episodes.retain(|episode| episode.id != id);
        if episodes.len() == before {
            return Ok(false);
        }
        self.set(EPISODES, &episodes).await?;
        Ok(true)
    }

    pub async fn set_favorite_movie(&self, id: u64, favorite: bool) -> Result<(), StoreError> {
        self.set_favorite(FAVORITE_MOVIES, id, favorite).await
    }

    pub async fn set_favorite_episode(&self, id: u64, favorite: bool) -> Result<(), StoreError> {
        self.set_favorite(FAVORITE_EPISODES, id, favorite).await
    }

    async fn set_favorite(&self, name: &str, id: u64, favorite: bool) -> Result<(), StoreError> {
        let mut ids: Vec<u64> = self.get(name).await?;
        ids.retain(|existing| *existing != id);
        if favorite {
            ids.push(id);
        }
        ids.sort_unstable();
        self.set(name, &ids).await
    }

    async fn id_set(&self, name: &str) -> Result<HashSet<u64>, StoreError> {
        let ids: Vec<u64> = self.get(name).await?;
        Ok(ids.into_iter().collect())
    }
}

#[async_trait]
impl WatchHistoryStore for JsonHistoryStore {
    async fn watched_movies(&self) -> Result<Vec<WatchedMovie>, StoreError> {
        self.get(MOVIES).await
    }

    async fn watched_episodes(&self) -> Result<Vec<WatchedEpisode>, StoreError> {
        self.get(EPISODES).await
    }

    async fn favorite_movie_ids(&self) -> Result<HashSet<u64>, StoreError> {
        self.id_set(FAVORITE_MOVIES).await
    }

    async fn favorite_episode_ids(&self) -> Result<HashSet<u64>, StoreError> {
        self.id_set(FAVORITE_EPISODES).await
    }
}
