//! Viewer session
//!
//! `EpisodeViewer` owns the listing provider, both selectors and the current
//! page, and dispatches the user actions: selecting a show, selecting an
//! episode and searching.

use crate::cache::SessionCache;
use crate::listing::{CachedListingProvider, Episode, ListingError, ListingProvider, TvMazeProvider};
use crate::search::search;
use crate::selectors::{EpisodeSelection, EpisodeSelector, ShowSelector};
use crate::view::{LOADING_MESSAGE, PageView, RootContent, build_cards};
use crate::{ViewerConfig, ViewerError, ViewerEvent};
use log::{debug, info, warn};
use std::rc::Rc;

type EventHandler = Box<dyn FnMut(ViewerEvent)>;

/// Interactive episode viewer session
///
/// All state, the fetched listings included, lives as long as the session.
pub struct EpisodeViewer<P>
where
    P: ListingProvider,
{
    provider: CachedListingProvider<P>,
    show_selector: ShowSelector,
    episode_selector: EpisodeSelector,
    /// Option value of the selected show, empty when none
    selected_show: String,
    /// Full episode list of the selected show
    episodes: Option<Rc<[Episode]>>,
    search_term: String,
    search_status: Option<String>,
    root: RootContent,
    on_event: EventHandler,
}

impl EpisodeViewer<TvMazeProvider> {
    /// Creates a session talking to the API configured in `config`
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(TvMazeProvider::with_base_url(&config.base_url))
    }
}

impl<P> EpisodeViewer<P>
where
    P: ListingProvider,
{
    /// Creates a session with an empty cache around `provider`
    pub fn new(provider: P) -> Self {
        Self {
            provider: CachedListingProvider::new(provider, SessionCache::new()),
            show_selector: ShowSelector::new(),
            episode_selector: EpisodeSelector::new(),
            selected_show: String::new(),
            episodes: None,
            search_term: String::new(),
            search_status: None,
            root: RootContent::Empty,
            on_event: Box::new(|_| {}),
        }
    }

    /// Registers the callback receiving progress events
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_viewer::{EpisodeViewer, TvMazeProvider, ViewerEvent};
    ///
    /// let mut viewer = EpisodeViewer::new(TvMazeProvider::new());
    /// viewer.set_event_handler(|event| {
    ///     if let ViewerEvent::FetchFailed { message } = event {
    ///         eprintln!("{}", message);
    ///     }
    /// });
    /// ```
    pub fn set_event_handler<F>(&mut self, handler: F)
    where
        F: FnMut(ViewerEvent) + 'static,
    {
        self.on_event = Box::new(handler);
    }

    fn emit(&mut self, event: ViewerEvent) {
        (self.on_event)(event);
    }

    /// Runs `fetch` with the loading message displayed
    ///
    /// The loading message is removed exactly once after the fetch settled,
    /// whatever its outcome, and before anything else is rendered.
    fn fetch_with_loading<T>(
        &mut self,
        fetch: impl FnOnce(&CachedListingProvider<P>) -> Result<T, ListingError>,
    ) -> Result<T, ListingError> {
        self.root = RootContent::Loading(LOADING_MESSAGE.to_string());
        let result = fetch(&self.provider);
        self.root = RootContent::Empty;
        self.emit(ViewerEvent::FetchSettled);
        result
    }

    fn show_error(&mut self, message: String) {
        warn!("{}", message);
        self.root = RootContent::Error(message.clone());
        self.emit(ViewerEvent::FetchFailed { message });
    }

    /// Replaces the display area with one card per episode
    fn render(&mut self, episodes: &[Episode]) {
        debug!("Rendering {} episode(s)", episodes.len());
        self.root = RootContent::Episodes(build_cards(episodes));
        self.emit(ViewerEvent::Rendered {
            card_count: episodes.len(),
        });
    }

    /// Loads the show index and populates the show selector
    pub fn load_shows(&mut self) -> Result<(), ViewerError> {
        let from_cache = self.provider.has_shows();

        let result = if from_cache {
            self.provider.shows()
        } else {
            self.emit(ViewerEvent::FetchingShows);
            self.fetch_with_loading(|provider| provider.shows())
        };

        match result {
            Ok(shows) => {
                info!("Loaded {} show(s)", shows.len());
                self.emit(ViewerEvent::ShowsLoaded {
                    count: shows.len(),
                    from_cache,
                });
                self.show_selector.populate(shows);
                Ok(())
            }
            Err(e) => {
                self.show_error(format!("Error fetching shows: {}", e));
                Err(e.into())
            }
        }
    }

    /// Handles a change of the show selector
    ///
    /// An empty value is ignored. Otherwise the show's episodes are loaded
    /// (from the cache when possible), rendered in full, offered in the
    /// episode selector, and the search is reset.
    pub fn select_show(&mut self, value: &str) -> Result<(), ViewerError> {
        let Some(show_id) = self.show_selector.resolve(value)? else {
            return Ok(());
        };
        self.selected_show = show_id.to_string();

        let from_cache = self.provider.has_episodes(show_id);
        let result = if from_cache {
            self.provider.episodes(show_id)
        } else {
            self.emit(ViewerEvent::FetchingEpisodes { show_id });
            self.fetch_with_loading(|provider| provider.episodes(show_id))
        };

        self.search_term.clear();
        self.search_status = None;

        match result {
            Ok(episodes) => {
                info!("Show {} has {} episode(s)", show_id, episodes.len());
                self.emit(ViewerEvent::EpisodesLoaded {
                    show_id,
                    count: episodes.len(),
                    from_cache,
                });
                self.episode_selector.populate(Rc::clone(&episodes));
                self.render(&episodes);
                self.episodes = Some(episodes);
                Ok(())
            }
            Err(e) => {
                self.episodes = None;
                self.episode_selector = EpisodeSelector::new();
                self.show_error(format!("Error fetching episodes: {}", e));
                Err(e.into())
            }
        }
    }

    /// Handles a change of the episode selector
    ///
    /// The placeholder value restores the full list; an episode id shows
    /// that episode alone.
    pub fn select_episode(&mut self, value: &str) -> Result<(), ViewerError> {
        let episodes = self.episodes.clone().ok_or(ViewerError::NoShowSelected)?;

        match self.episode_selector.resolve(value)? {
            EpisodeSelection::All => self.render(&episodes),
            EpisodeSelection::Single(episode) => self.render(std::slice::from_ref(&episode)),
        }
        Ok(())
    }

    /// Handles input in the search field
    ///
    /// Filters the full episode list of the selected show and updates the
    /// search status line.
    pub fn search(&mut self, term: &str) -> Result<(), ViewerError> {
        let episodes = self.episodes.clone().ok_or(ViewerError::NoShowSelected)?;

        let result = search(term, &episodes);
        debug!("Search {:?}: {}", term, result.status_line);

        self.search_term = term.to_string();
        self.render(&result.episodes);
        self.search_status = Some(result.status_line);
        Ok(())
    }

    /// Returns the full episode list of the selected show
    pub fn episodes(&self) -> Option<&[Episode]> {
        self.episodes.as_deref()
    }

    /// Returns the listing provider behind the session cache
    pub fn provider(&self) -> &P {
        self.provider.inner()
    }

    /// Returns a snapshot of the page for rendering
    pub fn page(&self) -> PageView<'_> {
        PageView {
            root: &self.root,
            show_options: self.show_selector.options(),
            selected_show: &self.selected_show,
            episode_options: self.episode_selector.options(),
            search_term: &self.search_term,
            search_status: self.search_status.as_deref(),
        }
    }
}
