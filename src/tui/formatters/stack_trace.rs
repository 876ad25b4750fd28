//! Captured errors rendered as a conventional trace.
//!
//! ```text
//! Stack trace (most recent call last):
//!   at load_status (src/main.rs:42)
//!       let data = fs::read_to_string(path)?;
//! StatusLoadError: failed to read status file
//! ```
//!
//! Causes come first, each followed by a chaining notice, so the error the
//! user actually hit is always the last line. Missing frame data becomes a
//! placeholder instead of a failure.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use super::RenderableText;
use crate::core::error_record::{ErrorRecord, StackFrame};

pub const TRACE_HEADER: &str = "Stack trace (most recent call last):";
pub const CAUSE_NOTICE: &str = "The above error was the direct cause of the following error:";
pub const UNKNOWN: &str = "<unknown>";
pub const MISSING_FRAME: &str = "  <frame data unavailable>";

pub fn stack_trace_lines(error: &ErrorRecord) -> RenderableText {
    let mut lines = Vec::new();
    push_record(&mut lines, error);
    RenderableText::from(lines)
}

fn push_record(lines: &mut Vec<Line<'static>>, record: &ErrorRecord) {
    if let Some(cause) = &record.cause {
        push_record(lines, cause);
        lines.push(Line::default());
        lines.push(Line::styled(CAUSE_NOTICE, notice_style()));
        lines.push(Line::default());
    }

    if !record.frames.is_empty() {
        lines.push(Line::styled(TRACE_HEADER, notice_style()));
        for frame in &record.frames {
            push_frame(lines, frame);
        }
    }

    push_summary(lines, record);
}

fn push_frame(lines: &mut Vec<Line<'static>>, frame: &StackFrame) {
    if frame.is_empty() {
        lines.push(Line::styled(MISSING_FRAME, notice_style()));
        return;
    }

    let function = frame.function.as_deref().unwrap_or(UNKNOWN);
    let file = frame.file.as_deref().unwrap_or(UNKNOWN);
    let location = match frame.line {
        Some(line) => format!("{file}:{line}"),
        None => file.to_string(),
    };
    lines.push(Line::from(format!("  at {function} ({location})")));

    if let Some(context) = frame.context.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        lines.push(Line::styled(
            format!("      {context}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
}

/// `kind: message`, with any further message lines following on their own.
fn push_summary(lines: &mut Vec<Line<'static>>, record: &ErrorRecord) {
    let kind = if record.kind.trim().is_empty() {
        "Error"
    } else {
        record.kind.trim()
    };
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);

    let mut message_lines = record.message.lines();
    match message_lines.next().filter(|first| !first.trim().is_empty()) {
        Some(first) => lines.push(Line::styled(format!("{kind}: {first}"), style)),
        None => lines.push(Line::styled(kind.to_string(), style)),
    }
    for rest in message_lines {
        lines.push(Line::styled(rest.to_string(), style));
    }
}

fn notice_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}
