//! Wrapping styled lines to the width of a view.
//!
//! `textwrap` picks the break points on the plain text; the rows are then cut
//! back out of the original spans so key highlights and colors survive.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::formatters::plain_text;

/// Build textwrap options for a content column `width` cells wide.
fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Split `line` into rows no wider than `width`, keeping span styles.
///
/// Leading indentation is repeated on every continuation row unless it would
/// take up half the width or more. A zero width returns the line untouched.
pub fn wrap_line(line: &Line<'static>, width: u16) -> Vec<Line<'static>> {
    let text = plain_text(line);
    let width = usize::from(width);
    if width == 0 || text.width() <= width {
        return vec![line.clone()];
    }

    let indent_end = text.len() - text.trim_start_matches(' ').len();
    let indent_width = text[..indent_end].width();
    let (indent_end, indent_width) = if indent_width * 2 < width {
        (indent_end, indent_width)
    } else {
        (0, 0)
    };

    let mut rows = Vec::new();
    let mut offset = indent_end;
    for segment in textwrap::wrap(&text[indent_end..], wrap_options(width - indent_width)) {
        // Segments come back in order; only spaces are dropped between them
        let Some(found) = text[offset..].find(&*segment) else {
            break;
        };
        let start = offset + found;
        let end = start + segment.len();

        let mut spans = slice_spans(line, 0, indent_end);
        spans.extend(slice_spans(line, start, end));
        rows.push(Line::from(spans).style(line.style));
        offset = end;
    }

    if rows.is_empty() {
        rows.push(line.clone());
    }
    rows
}

/// The parts of `line`'s spans covering bytes `start..end` of its plain text.
fn slice_spans(line: &Line<'static>, start: usize, end: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut span_start = 0;
    for span in &line.spans {
        let span_end = span_start + span.content.len();
        let from = start.max(span_start);
        let to = end.min(span_end);
        if from < to {
            spans.push(Span::styled(
                span.content[from - span_start..to - span_start].to_string(),
                span.style,
            ));
        }
        span_start = span_end;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn plain_rows(rows: &[Line<'static>]) -> Vec<String> {
        rows.iter().map(plain_text).collect()
    }

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn short_line_is_unchanged() {
        let line = Line::from("fits easily");
        assert_eq!(wrap_line(&line, 40), vec![line]);
    }

    #[test]
    fn zero_width_is_unchanged() {
        let line = Line::from("anything at all");
        assert_eq!(wrap_line(&line, 0), vec![line]);
    }

    #[test]
    fn splits_at_spaces_within_width() {
        let rows = plain_rows(&wrap_line(&Line::from("hello world"), 5));
        assert_eq!(rows, vec!["hello", "world"]);
    }

    #[test]
    fn long_line_keeps_every_word() {
        let text = "start of the post and then a long tail END_MARKER";
        let rows = plain_rows(&wrap_line(&Line::from(text), 16));
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| row.width() <= 16));
        assert_eq!(words(&rows.join(" ")), words(text));
    }

    #[test]
    fn indentation_repeats_on_continuation_rows() {
        let text = "    \"content\": \"aaa bbb ccc ddd\"";
        let rows = plain_rows(&wrap_line(&Line::from(text), 20));
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.starts_with("    "));
            assert!(!row.starts_with("     "));
            assert!(row.width() <= 20);
        }
        assert_eq!(words(&rows.join(" ")), words(text));
    }

    #[test]
    fn span_styles_survive_the_split() {
        let cyan = Style::default().fg(Color::Cyan);
        let line = Line::from(vec![
            Span::raw("press "),
            Span::styled("Esc", cyan),
            Span::raw(" to close this window now"),
        ]);
        let rows = wrap_line(&line, 12);
        assert!(rows.len() > 1);

        let key = rows
            .iter()
            .flat_map(|row| row.spans.iter())
            .find(|span| span.content == "Esc")
            .expect("key span kept whole");
        assert_eq!(key.style, cyan);
    }

    #[test]
    fn wide_characters_break_by_cell_width() {
        let text = "🦀🦀🦀🦀";
        let rows = plain_rows(&wrap_line(&Line::from(text), 4));
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| row.width() <= 4));
        assert_eq!(rows.concat(), text);
    }
}
