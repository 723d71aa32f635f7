//! Show and episode selectors
//!
//! The selectors hold the option lists offered to the user and translate a
//! selected option value back into a show id or an episode.

use crate::formatting::episode_option_label;
use crate::listing::{Episode, Show};
use feruca::Collator;
use std::cmp::Ordering;
use std::rc::Rc;
use thiserror::Error;

/// Label of the episode selector entry that stands for "all episodes"
pub const EPISODE_PLACEHOLDER: &str = "Select an episode...";

/// Errors raised when a selected value cannot be resolved
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The show selector value is not a show id
    #[error("Invalid show id: {0:?}")]
    InvalidShowId(String),

    /// The episode selector value names no episode of the current show
    #[error("Unknown episode: {0:?}")]
    UnknownEpisode(String),
}

/// A single entry of a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported when the entry is chosen; empty for placeholders
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Orders shows by name, ignoring case
///
/// Lowercased names are compared with the Unicode Collation Algorithm (CLDR
/// root order), so "Élite" sorts with the E's rather than after "Z". Names
/// equal up to case fall back to a case-sensitive comparison and then to the
/// id, so the order is total and stable across runs.
pub fn compare_show_names(collator: &mut Collator, a: &Show, b: &Show) -> Ordering {
    let a_lower = a.name.to_lowercase();
    let b_lower = b.name.to_lowercase();

    collator
        .collate(a_lower.as_str(), b_lower.as_str())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sorts shows case-insensitively by name, ascending
pub fn sort_shows(shows: &mut [Show]) {
    let mut collator = Collator::default();
    shows.sort_by(|a, b| compare_show_names(&mut collator, a, b));
}

/// Option list of the show selector
#[derive(Debug, Default)]
pub struct ShowSelector {
    options: Vec<SelectOption>,
}

impl ShowSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the options with one entry per show, sorted by name
    pub fn populate(&mut self, mut shows: Vec<Show>) {
        sort_shows(&mut shows);
        self.options = shows
            .into_iter()
            .map(|show| SelectOption::new(show.id.to_string(), show.name))
            .collect();
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Translates a selected value into a show id
    ///
    /// An empty value means nothing was selected and yields `None`.
    pub fn resolve(&self, value: &str) -> Result<Option<u64>, SelectionError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse()
            .map(Some)
            .map_err(|_| SelectionError::InvalidShowId(value.to_string()))
    }
}

/// What the episode selector asks to display
#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeSelection {
    /// The placeholder was chosen: show the full list
    All,
    /// A single episode was chosen
    Single(Episode),
}

/// Option list of the episode selector for the current show
#[derive(Debug)]
pub struct EpisodeSelector {
    options: Vec<SelectOption>,
    episodes: Rc<[Episode]>,
}

impl Default for EpisodeSelector {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::new("", EPISODE_PLACEHOLDER)],
            episodes: Rc::from(Vec::new()),
        }
    }
}

impl EpisodeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the options from scratch for the given episodes
    ///
    /// Episodes keep the order delivered by the API; prior options are
    /// discarded, so repeated population never duplicates entries.
    pub fn populate(&mut self, episodes: Rc<[Episode]>) {
        self.options.clear();
        self.options.push(SelectOption::new("", EPISODE_PLACEHOLDER));
        self.options.extend(
            episodes
                .iter()
                .map(|episode| SelectOption::new(episode.id.to_string(), episode_option_label(episode))),
        );
        self.episodes = episodes;
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Translates a selected value into the episodes to display
    pub fn resolve(&self, value: &str) -> Result<EpisodeSelection, SelectionError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(EpisodeSelection::All);
        }

        let id: u64 = value
            .parse()
            .map_err(|_| SelectionError::UnknownEpisode(value.to_string()))?;

        self.episodes
            .iter()
            .find(|episode| episode.id == id)
            .cloned()
            .map(EpisodeSelection::Single)
            .ok_or_else(|| SelectionError::UnknownEpisode(value.to_string()))
    }
}
