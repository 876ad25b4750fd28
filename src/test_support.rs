//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::{Value, json};

use crate::core::error_record::{ErrorRecord, StackFrame};
use crate::tui::formatters::{RenderableText, plain_text};

/// A trimmed-down status as the server would send it.
pub fn sample_status() -> Value {
    json!({
        "id": "109876543210",
        "visibility": "public",
        "sensitive": false,
        "spoiler_text": "",
        "in_reply_to_id": null,
        "replies_count": 3,
        "account": {
            "id": "42",
            "acct": "alice@example.social",
            "display_name": "Alice",
            "bot": false
        },
        "content": "<p>Hello <a href=\"https://example.social/tags/news\">#news</a></p>",
        "media_attachments": [],
        "tags": [
            {"name": "news", "url": "https://example.social/tags/news"}
        ]
    })
}

pub fn sample_error() -> ErrorRecord {
    ErrorRecord::new("StatusLoadError", "failed to read status file")
        .with_frame(StackFrame {
            function: Some("main".to_string()),
            file: Some("src/main.rs".to_string()),
            line: Some(10),
            context: Some("    run()?;".to_string()),
        })
        .with_frame(StackFrame {
            function: Some("load_status".to_string()),
            file: Some("src/tui/mod.rs".to_string()),
            line: Some(88),
            context: None,
        })
}

/// Plain text of every line, styling dropped.
pub fn text_lines(text: &RenderableText) -> Vec<String> {
    text.lines().iter().map(plain_text).collect()
}

/// Everything drawn on a test terminal, row after row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
