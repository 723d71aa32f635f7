//! Cached listing provider implementation
//!
//! This module provides a caching wrapper for listing providers that
//! memoizes shows and episode lists for the lifetime of a session.

use super::{Episode, ListingError, ListingProvider, Show};
use crate::cache::SessionCache;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// A caching wrapper for listing providers
///
/// This provider wraps another listing provider and only calls it on a cache
/// miss. Failed fetches leave the cache untouched.
pub struct CachedListingProvider<P>
where
    P: ListingProvider,
{
    /// The underlying listing provider
    provider: P,
    /// Session cache; interior mutability keeps the provider trait `&self`
    cache: RefCell<SessionCache>,
}

impl<P> CachedListingProvider<P>
where
    P: ListingProvider,
{
    /// Creates a new cached provider wrapping the given provider
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_viewer::{CachedListingProvider, SessionCache, TvMazeProvider};
    ///
    /// let cached = CachedListingProvider::new(TvMazeProvider::new(), SessionCache::new());
    /// assert!(!cached.has_episodes(82));
    /// ```
    pub fn new(provider: P, cache: SessionCache) -> Self {
        Self {
            provider,
            cache: RefCell::new(cache),
        }
    }

    /// Returns true if the show index is cached
    pub fn has_shows(&self) -> bool {
        self.cache.borrow().get_shows().is_some()
    }

    /// Returns true if the episodes of `show_id` are cached
    pub fn has_episodes(&self, show_id: u64) -> bool {
        self.cache.borrow().get_episodes(show_id).is_some()
    }

    /// Returns the shows, fetching them on a cache miss
    pub fn shows(&self) -> Result<Vec<Show>, ListingError> {
        if let Some(shows) = self.cache.borrow().get_shows() {
            debug!("Show index served from cache ({} shows)", shows.len());
            return Ok(shows);
        }

        let shows = self.provider.fetch_shows()?;
        let mut cache = self.cache.borrow_mut();
        cache.put_shows(shows);
        Ok(cache.get_shows().unwrap_or_default())
    }

    /// Returns the shared episode list of a show, fetching it on a cache miss
    pub fn episodes(&self, show_id: u64) -> Result<Rc<[Episode]>, ListingError> {
        if let Some(episodes) = self.cache.borrow().get_episodes(show_id) {
            debug!("Episodes of show {} served from cache", show_id);
            return Ok(episodes);
        }

        let episodes = self.provider.fetch_episodes(show_id)?;
        Ok(self.cache.borrow_mut().put_episodes(show_id, episodes))
    }

    /// Returns the wrapped provider
    pub fn inner(&self) -> &P {
        &self.provider
    }
}

impl<P> ListingProvider for CachedListingProvider<P>
where
    P: ListingProvider,
{
    fn fetch_shows(&self) -> Result<Vec<Show>, ListingError> {
        self.shows()
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingError> {
        self.episodes(show_id).map(|episodes| episodes.to_vec())
    }
}
