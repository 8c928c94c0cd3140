use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Favorited movie and episode ids. Membership only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorites {
    pub movie_ids: HashSet<u64>,
    pub episode_ids: HashSet<u64>,
}

impl Favorites {
    pub fn total(&self) -> usize {
        self.movie_ids.len() + self.episode_ids.len()
    }
}
