//! Text formatting helpers
//!
//! Pure functions producing the labels, headings and status lines shown by
//! the viewer.

use crate::listing::Episode;

/// Formats a season/episode pair as an episode code
///
/// Both numbers are zero-padded to at least two digits.
///
/// # Examples
///
/// ```
/// use episode_viewer::format_episode_code;
///
/// assert_eq!(format_episode_code(1, 5), "S01E05");
/// assert_eq!(format_episode_code(10, 23), "S10E23");
/// ```
pub fn format_episode_code(season: u32, number: u32) -> String {
    format!("S{:02}E{:02}", season, number)
}

/// Label of an episode in the episode selector: `S01E05 - Name`
pub fn episode_option_label(episode: &Episode) -> String {
    format!(
        "{} - {}",
        format_episode_code(episode.season, episode.number),
        episode.name
    )
}

/// Heading of an episode card: `Name - S01E05`
pub fn card_heading(episode: &Episode) -> String {
    format!(
        "{} - {}",
        episode.name,
        format_episode_code(episode.season, episode.number)
    )
}

/// Alt text of an episode card image
pub fn image_alt(episode: &Episode) -> String {
    format!("{} image", episode.name)
}

/// Status line shown next to the search input
pub fn search_status_line(filtered: usize, total: usize) -> String {
    format!("Displaying {} / {} episodes", filtered, total)
}

/// Converts an HTML summary into trimmed plain text
pub fn summary_text(summary: &str) -> String {
    nanohtml2text::html2text(summary).trim().to_string()
}
