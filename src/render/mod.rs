//! Page renderers
//!
//! This module turns a `PageView` into output for a concrete display
//! surface: a complete HTML document or plain terminal text.

mod html;
mod terminal;

pub use html::HtmlRenderer;
pub use terminal::TerminalRenderer;

use crate::view::PageView;

/// How episode summaries are emitted
///
/// The API delivers summaries as HTML fragments. They are untrusted input,
/// so they are reduced to escaped plain text unless raw output is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryPolicy {
    /// Strip markup and escape the remaining text
    #[default]
    Sanitized,
    /// Emit the summary markup untouched
    Raw,
}

/// Trait for display surfaces that can show the viewer page
pub trait PageRenderer {
    /// Renders the complete page
    fn render(&self, page: &PageView<'_>) -> String;
}
