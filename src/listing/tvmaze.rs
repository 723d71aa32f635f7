/// TVMaze listing provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeShow};
use super::{Episode, ListingError, ListingProvider, Show};
use log::debug;
use serde::de::DeserializeOwned;

/// Default location of the public TVMaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Listing provider for the TVMaze API.
///
/// This provider fetches the show index from `/shows` and the episode list
/// of a single show from `/shows/{id}/episodes`.
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeProvider {
    /// Creates a new TVMaze provider instance talking to the public API.
    pub fn new() -> Self {
        Self::with_base_url(TVMAZE_BASE_URL)
    }

    /// Creates a provider talking to a TVMaze compatible API at `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues a GET request and decodes the JSON body.
    ///
    /// Non-success statuses are turned into `ListingError::Http` carrying the
    /// status text; requests that never complete become `ListingError::Network`.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ListingError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ListingError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json()
            .map_err(|e| ListingError::Parse(e.to_string()))
    }
}

impl Default for TvMazeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingProvider for TvMazeProvider {
    fn fetch_shows(&self) -> Result<Vec<Show>, ListingError> {
        let shows: Vec<TvMazeShow> = self.get_json("/shows")?;
        Ok(shows.into_iter().map(TvMazeShow::into_show).collect())
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingError> {
        let episodes: Vec<TvMazeEpisode> = self.get_json(&format!("/shows/{}/episodes", show_id))?;
        Ok(episodes.into_iter().map(TvMazeEpisode::into_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_shows() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/shows")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1, "name": "Under the Dome"}, {"id": 2, "name": "Person of Interest"}]"#)
            .create();

        let provider = TvMazeProvider::with_base_url(&server.url());
        let shows = provider.fetch_shows().unwrap();

        mock.assert();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].name, "Under the Dome");
        assert_eq!(shows[1].id, 2);
    }

    #[test]
    fn test_fetch_episodes_keeps_api_order() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/shows/82/episodes")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 4952, "name": "Winter is Coming", "season": 1, "number": 1,
                     "summary": "<p>Lord Eddard Stark...</p>",
                     "image": {"medium": "https://static.tvmaze.com/1.jpg", "original": null}},
                    {"id": 4953, "name": "The Kingsroad", "season": 1, "number": 2,
                     "summary": null, "image": null}
                ]"#,
            )
            .create();

        let provider = TvMazeProvider::with_base_url(&format!("{}/", server.url()));
        let episodes = provider.fetch_episodes(82).unwrap();

        mock.assert();
        assert_eq!(
            episodes.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![4952, 4953]
        );
        assert_eq!(episodes[0].summary, "<p>Lord Eddard Stark...</p>");
        assert!(episodes[1].image.is_none());
    }

    #[test]
    fn test_http_error_carries_status_text() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/shows/999999/episodes")
            .with_status(404)
            .create();

        let provider = TvMazeProvider::with_base_url(&server.url());
        let error = provider.fetch_episodes(999999).unwrap_err();

        match &error {
            ListingError::Http {
                status,
                status_text,
            } => {
                assert_eq!(*status, 404);
                assert_eq!(status_text, "Not Found");
            }
            other => panic!("Expected HTTP error, got {:?}", other),
        }
        assert_eq!(error.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/shows")
            .with_status(200)
            .with_body("not json")
            .create();

        let provider = TvMazeProvider::with_base_url(&server.url());
        assert!(matches!(
            provider.fetch_shows(),
            Err(ListingError::Parse(_))
        ));
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Port 1 is reserved and refuses connections on loopback
        let provider = TvMazeProvider::with_base_url("http://127.0.0.1:1");
        assert!(matches!(
            provider.fetch_shows(),
            Err(ListingError::Network(_))
        ));
    }
}
