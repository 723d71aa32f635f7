//! Session cache module
//!
//! This module provides the in-memory memoization of fetched listings. The
//! cache lives exactly as long as the viewer session that owns it; nothing is
//! written to disk.

use crate::listing::{Episode, Show};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// In-memory cache of shows and per-show episode lists
///
/// Episode lists are stored as shared immutable slices, so handing one out
/// never copies the episodes and never allows them to be mutated afterwards.
#[derive(Debug, Default)]
pub struct SessionCache {
    /// Show id to show record
    shows: BTreeMap<u64, Show>,
    /// Show id to that show's episodes in API order
    episodes: HashMap<u64, Rc<[Episode]>>,
}

impl SessionCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all cached shows, or None if the show index was never stored
    ///
    /// An empty index counts as a miss so that callers fetch again.
    pub fn get_shows(&self) -> Option<Vec<Show>> {
        if self.shows.is_empty() {
            return None;
        }
        Some(self.shows.values().cloned().collect())
    }

    /// Stores shows keyed by their id, overwriting entries with the same id
    pub fn put_shows(&mut self, shows: Vec<Show>) {
        for show in shows {
            self.shows.insert(show.id, show);
        }
    }

    /// Returns the cached episodes of a show, or None on a miss
    pub fn get_episodes(&self, show_id: u64) -> Option<Rc<[Episode]>> {
        self.episodes.get(&show_id).cloned()
    }

    /// Stores the episodes of a show and returns the shared handle to them
    pub fn put_episodes(&mut self, show_id: u64, episodes: Vec<Episode>) -> Rc<[Episode]> {
        let episodes: Rc<[Episode]> = episodes.into();
        self.episodes.insert(show_id, Rc::clone(&episodes));
        episodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: u64, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
        }
    }

    fn episode(id: u64) -> Episode {
        Episode {
            id,
            name: format!("Episode {}", id),
            season: 1,
            number: id as u32,
            summary: String::new(),
            image: None,
        }
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = SessionCache::new();
        assert!(cache.get_shows().is_none());
        assert!(cache.get_episodes(1).is_none());
    }

    #[test]
    fn test_put_shows_overwrites_by_id() {
        let mut cache = SessionCache::new();
        cache.put_shows(vec![show(2, "Archer"), show(1, "The Wire")]);
        cache.put_shows(vec![show(2, "Archer (2009)")]);

        let shows = cache.get_shows().unwrap();
        assert_eq!(shows, vec![show(1, "The Wire"), show(2, "Archer (2009)")]);

        cache.put_shows(Vec::new());
        assert_eq!(cache.get_shows().unwrap().len(), 2);
    }

    #[test]
    fn test_episodes_are_shared_per_show() {
        let mut cache = SessionCache::new();
        let stored = cache.put_episodes(5, vec![episode(1), episode(2)]);

        let loaded = cache.get_episodes(5).unwrap();
        assert!(Rc::ptr_eq(&stored, &loaded));
        assert_eq!(loaded.len(), 2);
        assert!(cache.get_episodes(6).is_none());
    }
}
