//! Free-text episode search
//!
//! Filtering always runs against the complete episode list of the selected
//! show, never against whatever subset is currently displayed.

use crate::formatting::search_status_line;
use crate::listing::Episode;

/// Result of a search over a show's episodes
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Matching episodes, in the order of the input list
    pub episodes: Vec<Episode>,
    /// `Displaying {matches} / {total} episodes`
    pub status_line: String,
}

/// Returns true if `episode` matches the already lowercased `needle`
fn matches(episode: &Episode, needle: &str) -> bool {
    episode.name.to_lowercase().contains(needle) || episode.summary.to_lowercase().contains(needle)
}

/// Filters episodes by case-insensitive substring match on name or summary
///
/// The summary is matched as delivered by the API, markup included. An empty
/// term matches every episode.
pub fn filter_episodes(term: &str, episodes: &[Episode]) -> Vec<Episode> {
    let needle = term.to_lowercase();
    episodes
        .iter()
        .filter(|episode| matches(episode, &needle))
        .cloned()
        .collect()
}

/// Filters episodes and builds the status line for the result
pub fn search(term: &str, episodes: &[Episode]) -> SearchResult {
    let filtered = filter_episodes(term, episodes);
    let status_line = search_status_line(filtered.len(), episodes.len());
    SearchResult {
        episodes: filtered,
        status_line,
    }
}
