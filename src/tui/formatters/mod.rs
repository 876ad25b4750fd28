//! # Content Formatters
//!
//! Pure functions turning domain data into lines ready for a `LineView`.
//! None of them touch the terminal, so they're tested by comparing lines.
//!
//! - `status_source`: raw status data as indented JSON
//! - `stack_trace`: a captured `ErrorRecord` as a readable trace
//! - `help`: the static help screen with highlighted key names

pub mod help;
pub mod stack_trace;
pub mod status_source;

pub use help::{help_lines, highlight_keys};
pub use stack_trace::stack_trace_lines;
pub use status_source::status_source_lines;

use ratatui::text::Line;

/// An immutable block of display lines, owned by the view that shows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderableText {
    lines: Vec<Line<'static>>,
}

impl RenderableText {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of line `index`, with styling dropped.
    pub fn plain_line(&self, index: usize) -> Option<String> {
        self.lines.get(index).map(plain_text)
    }
}

impl From<Vec<Line<'static>>> for RenderableText {
    fn from(lines: Vec<Line<'static>>) -> Self {
        Self { lines }
    }
}

impl FromIterator<Line<'static>> for RenderableText {
    fn from_iter<I: IntoIterator<Item = Line<'static>>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// Concatenate the span contents of a line.
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
