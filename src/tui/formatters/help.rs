//! Static help screen content.
//!
//! Key names inside square brackets, e.g. `[Q]`, are drawn in the key style
//! with the brackets removed.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::RenderableText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEntry {
    /// `toot <version>`
    Title,
    Divider,
    Header(&'static str),
    Text(&'static str),
    /// A key-binding description with bracketed key names.
    Keys(&'static str),
}

pub const HELP_TEMPLATE: &[HelpEntry] = &[
    HelpEntry::Title,
    HelpEntry::Divider,
    HelpEntry::Header("General usage"),
    HelpEntry::Divider,
    HelpEntry::Keys("  [Arrow keys] or [J/K] to move around and scroll content"),
    HelpEntry::Keys("  [PageUp] and [PageDown] to scroll content"),
    HelpEntry::Keys("  [Enter] or [Space] to activate buttons and menu options"),
    HelpEntry::Keys("  [Esc] or [Q] to go back, close overlays, such as menus and this help text"),
    HelpEntry::Divider,
    HelpEntry::Header("General keys"),
    HelpEntry::Divider,
    HelpEntry::Keys("  [Q] - quit toot"),
    HelpEntry::Keys("  [G] - go to - switch timelines"),
    HelpEntry::Keys("  [H] - show this help"),
    HelpEntry::Keys("  [E] - show details of the last error"),
    HelpEntry::Divider,
    HelpEntry::Header("Status keys"),
    HelpEntry::Divider,
    HelpEntry::Text("These commands are applied to the currently focused status."),
    HelpEntry::Divider,
    HelpEntry::Keys("  [B] - Boost/unboost status"),
    HelpEntry::Keys("  [C] - Compose new status"),
    HelpEntry::Keys("  [F] - Favourite/unfavourite status"),
    HelpEntry::Keys("  [R] - Reply to current status"),
    HelpEntry::Keys("  [S] - Show text marked as sensitive"),
    HelpEntry::Keys("  [T] - Show status thread (replies)"),
    HelpEntry::Keys("  [U] - Show the status data in JSON as received from the server"),
    HelpEntry::Keys("  [V] - Open status in default browser"),
];

pub fn key_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn help_lines(version: &str) -> RenderableText {
    HELP_TEMPLATE
        .iter()
        .map(|entry| match entry {
            HelpEntry::Title => Line::styled(
                format!("toot {version}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            HelpEntry::Divider => Line::default(),
            HelpEntry::Header(text) => {
                Line::styled(*text, Style::default().add_modifier(Modifier::BOLD))
            }
            HelpEntry::Text(text) => Line::from(*text),
            HelpEntry::Keys(text) => highlight_keys(text, key_style(), Style::default()),
        })
        .collect()
}

/// Split `text` on `[` and `]`, styling the bracketed parts with `high` and
/// everything else with `low`. Empty parts are dropped.
pub fn highlight_keys(text: &str, high: Style, low: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = text
        .split(['[', ']'])
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let style = if i % 2 == 1 { high } else { low };
            Span::styled(part.to_string(), style)
        })
        .collect();
    Line::from(spans)
}
