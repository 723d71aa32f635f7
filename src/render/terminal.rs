//! Plain text renderer for the interactive terminal.
use super::{PageRenderer, SummaryPolicy};
use crate::formatting::summary_text;
use crate::view::{ATTRIBUTION_LINK_TEXT, ATTRIBUTION_TEXT, ATTRIBUTION_URL, Card, PageView, RootContent};
use colored::Colorize;

/// Renders the display area as terminal text
///
/// Selectors are interactive prompts on the terminal, so only the search
/// status line and the content of the display area are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    summary_policy: SummaryPolicy,
}

impl TerminalRenderer {
    pub fn new(summary_policy: SummaryPolicy) -> Self {
        Self { summary_policy }
    }

    fn render_card(&self, card: &Card) -> String {
        let mut text = format!("{}\n", card.heading.bold());

        if let Some(image) = &card.image {
            text.push_str(&format!("  Image: {}\n", image.src));
        }

        let summary = match self.summary_policy {
            SummaryPolicy::Sanitized => summary_text(&card.summary),
            SummaryPolicy::Raw => card.summary.clone(),
        };
        if !summary.is_empty() {
            for line in summary.lines().filter(|line| !line.trim().is_empty()) {
                text.push_str(&format!("  {}\n", line.trim()));
            }
        }

        text
    }
}

impl PageRenderer for TerminalRenderer {
    fn render(&self, page: &PageView<'_>) -> String {
        let mut text = String::new();

        if let Some(status) = page.search_status {
            text.push_str(&format!("{}\n\n", status.dimmed()));
        }

        match page.root {
            RootContent::Empty => {}
            RootContent::Loading(message) => {
                text.push_str(&format!("{}\n", message));
            }
            RootContent::Error(message) => {
                text.push_str(&format!("{}\n", message.red()));
            }
            RootContent::Episodes(cards) => {
                for card in cards {
                    text.push_str(&self.render_card(card));
                    text.push('\n');
                }
                text.push_str(&format!(
                    "{} {} ({})\n",
                    ATTRIBUTION_TEXT, ATTRIBUTION_LINK_TEXT, ATTRIBUTION_URL
                ));
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::episode;
    use crate::view::build_cards;

    fn view(root: &RootContent) -> PageView<'_> {
        PageView {
            root,
            show_options: &[],
            selected_show: "",
            episode_options: &[],
            search_term: "",
            search_status: None,
        }
    }

    #[test]
    fn test_cards_render_plain_summaries() {
        let root = RootContent::Episodes(build_cards(&[
            episode(1, 1, 1, "Pilot", "<p>It all starts here.</p>"),
            episode(2, 1, 2, "Second", ""),
        ]));
        let text = TerminalRenderer::default().render(&view(&root));

        assert!(text.contains("Pilot - S01E01"));
        assert!(text.contains("It all starts here."));
        assert!(!text.contains("<p>"));
        assert!(text.contains("https://static.tvmaze.com/medium/1.jpg"));
        assert!(text.find("Pilot - S01E01").unwrap() < text.find("Second - S01E02").unwrap());
        assert!(text.trim_end().ends_with("(https://tvmaze.com/)"));
    }

    #[test]
    fn test_error_message_is_shown() {
        let root = RootContent::Error("Error fetching episodes: HTTP 500".to_string());
        let text = TerminalRenderer::default().render(&view(&root));
        assert!(text.contains("Error fetching episodes: HTTP 500"));
    }
}
