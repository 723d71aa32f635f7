//! episode_viewer - Browse TV show episode listings
//!
//! This library provides the core functionality for listing shows and their
//! episodes from TVMaze, caching them for the session, filtering them by
//! free-text search and rendering them as episode cards.

mod cache;
mod formatting;
mod listing;
mod render;
mod search;
mod selectors;
mod view;
mod viewer;

#[cfg(test)]
mod testing;

pub use cache::SessionCache;
pub use formatting::{
    card_heading, episode_option_label, format_episode_code, image_alt, search_status_line,
    summary_text,
};
pub use listing::{
    CachedListingProvider, Episode, EpisodeImage, ListingError, ListingProvider, Show,
    TVMAZE_BASE_URL, TvMazeProvider,
};
pub use render::{HtmlRenderer, PageRenderer, SummaryPolicy, TerminalRenderer};
pub use search::{SearchResult, filter_episodes, search};
pub use selectors::{
    EPISODE_PLACEHOLDER, EpisodeSelection, EpisodeSelector, SelectOption, SelectionError,
    ShowSelector, sort_shows,
};
pub use view::{Card, CardImage, LOADING_MESSAGE, PageView, RootContent, build_cards};
pub use viewer::EpisodeViewer;

use std::io;
use std::path::Path;
use thiserror::Error;

/// Progress event emitted by a viewer session
///
/// These events allow front ends to report what the session is doing
/// without inspecting the page after every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The show index is being fetched; the loading message is displayed
    FetchingShows,

    /// The show selector was populated
    ShowsLoaded { count: usize, from_cache: bool },

    /// Episodes of a show are being fetched; the loading message is displayed
    FetchingEpisodes { show_id: u64 },

    /// A fetch finished and the loading message was removed
    FetchSettled,

    /// Episodes of a show are available
    EpisodesLoaded {
        show_id: u64,
        count: usize,
        from_cache: bool,
    },

    /// A fetch failed; `message` is what the display area shows
    FetchFailed { message: String },

    /// The display area now shows a card list
    Rendered { card_count: usize },
}

/// Settings of a viewer session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Base URL of the TVMaze compatible API
    pub base_url: String,
    /// How summaries are rendered
    pub summary_policy: SummaryPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            summary_policy: SummaryPolicy::default(),
        }
    }
}

/// Top-level error type for viewer operations
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Fetching listings failed
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    /// A selected value could not be resolved
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Episode actions need a selected show
    #[error("No show selected")]
    NoShowSelected,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Renders the page as HTML and writes it to `path`
///
/// The file is replaced on every call.
pub fn write_html_snapshot(
    path: &Path,
    page: &PageView<'_>,
    renderer: &HtmlRenderer,
) -> Result<(), ViewerError> {
    std::fs::write(path, renderer.render(page))?;
    Ok(())
}
