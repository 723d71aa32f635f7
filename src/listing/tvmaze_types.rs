/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use super::{Episode, EpisodeImage, Show};
use serde::Deserialize;

/// A single entry of the `/shows` index.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    /// The name of the TV show
    pub name: String,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
    /// Episode summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Image links (null when the episode has no still)
    pub image: Option<TvMazeImage>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

impl TvMazeShow {
    /// Converts to our internal Show structure.
    pub fn into_show(self) -> Show {
        Show {
            id: self.id,
            name: self.name,
        }
    }
}

impl TvMazeEpisode {
    /// Converts to our internal Episode structure.
    ///
    /// Missing titles become "Unknown", missing summaries empty and missing
    /// episode numbers 0.
    pub fn into_episode(self) -> Episode {
        let image = self.image.and_then(|image| {
            // Fall back to the original when no medium variant exists
            let medium = image.medium.or_else(|| image.original.clone())?;
            Some(EpisodeImage {
                medium,
                original: image.original,
            })
        });

        Episode {
            id: self.id,
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            season: self.season,
            number: self.number.unwrap_or(0),
            summary: self.summary.unwrap_or_default(),
            image,
        }
    }
}
