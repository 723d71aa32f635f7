//! Described view of the viewer page
//!
//! Everything the user sees is modelled as plain data here. Renderers in
//! `crate::render` turn it into HTML or terminal output.

use crate::formatting::{card_heading, image_alt};
use crate::listing::Episode;
use crate::selectors::SelectOption;

/// Message shown in the display area while a fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading episodes, please wait...";

/// Attribution footer appended after every card list
pub const ATTRIBUTION_TEXT: &str = "Data originally from";
pub const ATTRIBUTION_LINK_TEXT: &str = "TVMaze.com";
pub const ATTRIBUTION_URL: &str = "https://tvmaze.com/";

/// Image of an episode card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

/// One rendered episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub episode_id: u64,
    /// `Name - S01E05`
    pub heading: String,
    pub image: Option<CardImage>,
    /// Summary markup exactly as delivered by the API
    pub summary: String,
}

impl From<&Episode> for Card {
    fn from(episode: &Episode) -> Self {
        Card {
            episode_id: episode.id,
            heading: card_heading(episode),
            image: episode.image.as_ref().map(|image| CardImage {
                src: image.medium.clone(),
                alt: image_alt(episode),
            }),
            summary: episode.summary.clone(),
        }
    }
}

/// Builds one card per episode, in input order
pub fn build_cards(episodes: &[Episode]) -> Vec<Card> {
    episodes.iter().map(Card::from).collect()
}

/// Content of the display area
///
/// Loading and error states replace whatever was shown before, just like a
/// new card list does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RootContent {
    /// Nothing rendered yet
    #[default]
    Empty,
    /// A fetch is in flight
    Loading(String),
    /// The last fetch failed
    Error(String),
    /// A card list, always followed by the attribution footer
    Episodes(Vec<Card>),
}

impl RootContent {
    pub fn is_loading(&self) -> bool {
        matches!(self, RootContent::Loading(_))
    }

    /// Returns the displayed cards, empty unless a card list is shown
    pub fn cards(&self) -> &[Card] {
        match self {
            RootContent::Episodes(cards) => cards,
            _ => &[],
        }
    }
}

/// Snapshot of the whole page handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub root: &'a RootContent,
    pub show_options: &'a [SelectOption],
    /// Value of the selected show option, empty when none
    pub selected_show: &'a str,
    pub episode_options: &'a [SelectOption],
    pub search_term: &'a str,
    /// `Displaying x / y episodes`, once a search ran
    pub search_status: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::episode;

    #[test]
    fn test_card_from_episode() {
        let card = Card::from(&episode(5, 1, 5, "Pilot", "<p>Hi</p>"));
        assert_eq!(card.heading, "Pilot - S01E05");
        assert_eq!(
            card.image,
            Some(CardImage {
                src: "https://static.tvmaze.com/medium/5.jpg".to_string(),
                alt: "Pilot image".to_string(),
            })
        );
        assert_eq!(card.summary, "<p>Hi</p>");
    }

    #[test]
    fn test_card_without_image() {
        let mut special = episode(9, 0, 0, "Special", "");
        special.image = None;
        assert_eq!(Card::from(&special).image, None);
    }

    #[test]
    fn test_root_content_cards() {
        let root = RootContent::Episodes(build_cards(&[episode(1, 1, 1, "A", "")]));
        assert_eq!(root.cards().len(), 1);
        assert!(RootContent::Loading(LOADING_MESSAGE.to_string()).cards().is_empty());
        assert!(RootContent::Loading(String::new()).is_loading());
    }
}
