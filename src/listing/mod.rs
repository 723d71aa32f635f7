//! Data structures and traits for TV show listing retrieval.
//!
//! This module provides the show and episode records consumed by the viewer,
//! as well as the `ListingProvider` trait implemented by the TVMaze client and
//! by the caching wrapper around it.
mod cached;
mod tvmaze;
mod tvmaze_types;

pub use cached::CachedListingProvider;
pub use tvmaze::{TVMAZE_BASE_URL, TvMazeProvider};

use thiserror::Error;

/// Errors that can occur while fetching listings.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The request never completed (DNS, connection, timeout, ...)
    #[error("{0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// A television series as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: u64,
    pub name: String,
}

/// Image URLs attached to an episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeImage {
    /// Medium sized variant, used on cards
    pub medium: String,
    /// Full resolution variant, if the API has one
    pub original: Option<String>,
}

/// Represents a single episode of a TV show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season (0 for specials)
    pub number: u32,
    /// Summary as an HTML fragment, empty when the API has none
    pub summary: String,
    pub image: Option<EpisodeImage>,
}

/// Trait for providers that can list shows and their episodes.
pub trait ListingProvider {
    /// Fetches every show known to the provider.
    fn fetch_shows(&self) -> Result<Vec<Show>, ListingError>;

    /// Fetches all episodes of a show, in season/number order.
    ///
    /// # Arguments
    ///
    /// * `show_id` - The identifier of the show as returned by `fetch_shows`
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingError>;
}
