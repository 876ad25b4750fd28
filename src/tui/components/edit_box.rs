//! Single-line text input used for the hashtag field of the goto menu.
//!
//! The cursor is a byte offset that always sits on a char boundary. Nothing
//! is validated here; callers read `text()` when they need it.

use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    ContentChanged,
    CursorMoved,
}

#[derive(Debug, Default)]
pub struct EditBox {
    caption: &'static str,
    buffer: String,
    /// Byte offset into `buffer` (0..=buffer.len())
    cursor: usize,
}

impl EditBox {
    pub fn new(caption: &'static str) -> Self {
        Self {
            caption,
            ..Default::default()
        }
    }

    pub fn caption(&self) -> &'static str {
        self.caption
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = single_line(text);
        self.cursor = self.buffer.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor, counted from the start of the caption.
    pub fn cursor_column(&self) -> u16 {
        let width = self.caption.width() + self.buffer[..self.cursor].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

impl EventHandler for EditBox {
    type Event = EditEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(EditEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text = single_line(text);
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(EditEvent::ContentChanged)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(EditEvent::ContentChanged)
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(EditEvent::ContentChanged)
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                Some(EditEvent::CursorMoved)
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                Some(EditEvent::CursorMoved)
            }
            TuiEvent::Home if self.cursor > 0 => {
                self.cursor = 0;
                Some(EditEvent::CursorMoved)
            }
            TuiEvent::End if self.cursor < self.buffer.len() => {
                self.cursor = self.buffer.len();
                Some(EditEvent::CursorMoved)
            }
            _ => None,
        }
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
