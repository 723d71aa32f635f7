//! Test helpers shared by the unit tests of several modules.

use crate::listing::{Episode, EpisodeImage, ListingError, ListingProvider, Show};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory provider counting how often it is asked for data
pub(crate) struct FakeProvider {
    shows: Vec<Show>,
    episodes: HashMap<u64, Vec<Episode>>,
    show_calls: Cell<usize>,
    episode_calls: Cell<usize>,
    show_failure: RefCell<Option<(u16, String)>>,
    episode_failure: RefCell<Option<(u16, String)>>,
}

impl FakeProvider {
    pub fn new(shows: Vec<Show>, episodes: HashMap<u64, Vec<Episode>>) -> Self {
        Self {
            shows,
            episodes,
            show_calls: Cell::new(0),
            episode_calls: Cell::new(0),
            show_failure: RefCell::new(None),
            episode_failure: RefCell::new(None),
        }
    }

    /// Makes every following show index fetch fail with the given HTTP status
    pub fn fail_shows_with(&self, status: u16, status_text: &str) {
        *self.show_failure.borrow_mut() = Some((status, status_text.to_string()));
    }

    /// Makes every following episode fetch fail with the given HTTP status
    pub fn fail_episodes_with(&self, status: u16, status_text: &str) {
        *self.episode_failure.borrow_mut() = Some((status, status_text.to_string()));
    }

    pub fn show_calls(&self) -> usize {
        self.show_calls.get()
    }

    pub fn episode_calls(&self) -> usize {
        self.episode_calls.get()
    }
}

impl ListingProvider for FakeProvider {
    fn fetch_shows(&self) -> Result<Vec<Show>, ListingError> {
        self.show_calls.set(self.show_calls.get() + 1);

        if let Some((status, status_text)) = self.show_failure.borrow().clone() {
            return Err(ListingError::Http {
                status,
                status_text,
            });
        }

        Ok(self.shows.clone())
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingError> {
        self.episode_calls.set(self.episode_calls.get() + 1);

        if let Some((status, status_text)) = self.episode_failure.borrow().clone() {
            return Err(ListingError::Http {
                status,
                status_text,
            });
        }

        self.episodes
            .get(&show_id)
            .cloned()
            .ok_or(ListingError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
            })
    }
}

pub(crate) fn episode(id: u64, season: u32, number: u32, name: &str, summary: &str) -> Episode {
    Episode {
        id,
        name: name.to_string(),
        season,
        number,
        summary: summary.to_string(),
        image: Some(EpisodeImage {
            medium: format!("https://static.tvmaze.com/medium/{}.jpg", id),
            original: None,
        }),
    }
}

pub(crate) fn sample_shows() -> Vec<Show> {
    vec![
        Show {
            id: 1,
            name: "The Wire".to_string(),
        },
        Show {
            id: 2,
            name: "archer".to_string(),
        },
    ]
}

pub(crate) fn sample_episodes() -> HashMap<u64, Vec<Episode>> {
    let mut episodes = HashMap::new();
    episodes.insert(
        1,
        vec![
            episode(11, 1, 1, "The Target", "<p>A murder trial ends in acquittal.</p>"),
            episode(12, 1, 2, "The Detail", "<p>The <b>detail</b> is assembled.</p>"),
            episode(13, 1, 3, "The Buys", "<p>Surveillance begins.</p>"),
        ],
    );
    episodes.insert(
        2,
        vec![
            episode(21, 1, 1, "Mole Hunt", "<p>Sterling hunts a mole.</p>"),
            episode(22, 1, 2, "Training Day", "<p>Lana trains a recruit.</p>"),
        ],
    );
    episodes
}
