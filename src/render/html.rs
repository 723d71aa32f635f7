//! HTML document renderer.
use super::{PageRenderer, SummaryPolicy};
use crate::formatting::summary_text;
use crate::selectors::SelectOption;
use crate::view::{ATTRIBUTION_LINK_TEXT, ATTRIBUTION_TEXT, ATTRIBUTION_URL, Card, PageView, RootContent};

/// Renders the page as a standalone HTML document
///
/// Controls keep the element ids the page script used: `show-selector`,
/// `episode-selector`, `search-input`, `search-result` and `root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    summary_policy: SummaryPolicy,
}

impl HtmlRenderer {
    pub fn new(summary_policy: SummaryPolicy) -> Self {
        Self { summary_policy }
    }

    /// Renders only the content of the `root` container
    pub fn render_root(&self, root: &RootContent) -> String {
        let mut html = String::new();

        match root {
            RootContent::Empty => {}
            RootContent::Loading(message) => {
                html.push_str(&format!("<p>{}</p>", escape_html(message)));
            }
            RootContent::Error(message) => {
                html.push_str(&format!(
                    "<p style=\"color: red;\">{}</p>",
                    escape_html(message)
                ));
            }
            RootContent::Episodes(cards) => {
                for card in cards {
                    html.push_str(&self.render_card(card));
                }
                html.push_str(&format!(
                    "<footer>{} <a href=\"{}\" target=\"_blank\">{}</a></footer>",
                    ATTRIBUTION_TEXT, ATTRIBUTION_URL, ATTRIBUTION_LINK_TEXT
                ));
            }
        }

        html
    }

    fn render_card(&self, card: &Card) -> String {
        let mut html = String::from("<div class=\"episode-card\">");
        html.push_str(&format!("<h2>{}</h2>", escape_html(&card.heading)));

        if let Some(image) = &card.image {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(&image.src),
                escape_html(&image.alt)
            ));
        }

        let summary = match self.summary_policy {
            SummaryPolicy::Sanitized => escape_html(&summary_text(&card.summary)),
            SummaryPolicy::Raw => card.summary.clone(),
        };
        html.push_str(&format!("<p>{}</p>", summary));
        html.push_str("</div>");
        html
    }
}

fn render_options(options: &[SelectOption], selected: &str) -> String {
    let mut html = String::new();
    for option in options {
        let selected_attr = if !selected.is_empty() && option.value == selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(&option.value),
            selected_attr,
            escape_html(&option.label)
        ));
    }
    html
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &PageView<'_>) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n<title>TV Show Episodes</title>\n");
        html.push_str("</head>\n<body>\n");

        html.push_str(&format!(
            "<select id=\"show-selector\">{}</select>\n",
            render_options(page.show_options, page.selected_show)
        ));
        html.push_str(&format!(
            "<select id=\"episode-selector\">{}</select>\n",
            render_options(page.episode_options, "")
        ));
        html.push_str(&format!(
            "<input type=\"search\" id=\"search-input\" value=\"{}\">\n",
            escape_html(page.search_term)
        ));
        html.push_str(&format!(
            "<span id=\"search-result\">{}</span>\n",
            escape_html(page.search_status.unwrap_or_default())
        ));
        html.push_str(&format!(
            "<div id=\"root\">{}</div>\n",
            self.render_root(page.root)
        ));

        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
