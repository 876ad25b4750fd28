//! Status data as received from the server, pretty-printed as JSON.

use log::error;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::RenderableText;

/// Four spaces per nesting level.
const INDENT: &[u8] = b"    ";

/// One line per physical line of the indented JSON. Keys keep the order they
/// had in the source document.
pub fn status_source_lines(status: &Value) -> RenderableText {
    match to_indented_json(status) {
        Ok(source) => source.lines().map(|line| Line::from(line.to_string())).collect(),
        Err(e) => {
            error!("Failed to serialize status data: {}", e);
            RenderableText::from(vec![Line::styled(
                format!("<status data could not be serialized: {e}>"),
                Style::default().fg(Color::Red),
            )])
        }
    }
}

fn to_indented_json(value: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
