//! # LineView Component
//!
//! A bordered overlay showing a `RenderableText`, with a focused line that
//! moves with the arrow keys and page keys. Lines wider than the overlay wrap
//! onto extra rows; focus and scrolling still count logical lines.
//!
//! The same component backs all three inspectors. Only the content differs:
//!
//! ```text
//! LineView::status_source(&status)  →  status_source_lines()
//! LineView::stack_trace(&error)     →  stack_trace_lines()
//! LineView::help(version)           →  help_lines()
//! ```
//!
//! Scrolling never fails. Moving past either end leaves focus where it is,
//! and an empty view has no focus at all.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState, Padding, Scrollbar, ScrollbarOrientation,
    ScrollbarState,
};
use serde_json::Value;

use crate::core::error_record::ErrorRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_wrap::wrap_line;
use crate::tui::event::TuiEvent;
use crate::tui::formatters::{RenderableText, help_lines, stack_trace_lines, status_source_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

pub struct LineView {
    title: String,
    text: RenderableText,
    list_state: ListState,
    /// Rows available for content in the last render (0 before the first one).
    viewport_height: u16,
    /// Rows the wrapped text took up in the last render.
    wrapped_rows: usize,
}

impl LineView {
    pub fn new(title: impl Into<String>, text: RenderableText) -> Self {
        let mut list_state = ListState::default();
        if !text.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title: title.into(),
            text,
            list_state,
            viewport_height: 0,
            wrapped_rows: 0,
        }
    }

    /// Raw status data as indented JSON.
    pub fn status_source(status: &Value) -> Self {
        Self::new("Status source", status_source_lines(status))
    }

    /// A captured error with its stack and causes.
    pub fn stack_trace(error: &ErrorRecord) -> Self {
        Self::new("Error", stack_trace_lines(error))
    }

    pub fn help(version: &str) -> Self {
        Self::new("Help", help_lines(version))
    }

    pub fn text(&self) -> &RenderableText {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn current_focus(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move focus `amount` lines in `direction`, stopping at the first/last line.
    pub fn scroll(&mut self, direction: ScrollDirection, amount: usize) {
        let Some(focus) = self.current_focus() else {
            return;
        };
        let last = self.text.len().saturating_sub(1);
        let target = match direction {
            ScrollDirection::Up => focus.saturating_sub(amount),
            ScrollDirection::Down => focus.saturating_add(amount).min(last),
        };
        if target != focus {
            self.list_state.select(Some(target));
        }
    }

    /// Lines moved by one page: the last rendered viewport height, at least 1.
    pub fn page_size(&self) -> usize {
        usize::from(self.viewport_height.max(1))
    }

    pub fn scroll_page(&mut self, direction: ScrollDirection) {
        self.scroll(direction, self.page_size());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll(ScrollDirection::Up, usize::MAX);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll(ScrollDirection::Down, usize::MAX);
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        if self.wrapped_rows <= usize::from(self.viewport_height) {
            return;
        }

        let mut scrollbar_state =
            ScrollbarState::new(self.text.len()).position(self.current_focus().unwrap_or(0));

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for LineView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Scroll  PgUp/PgDn Page  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        self.viewport_height = inner.height;

        let items: Vec<ListItem> = self
            .text
            .lines()
            .iter()
            .map(|line| ListItem::new(wrap_line(line, inner.width)))
            .collect();
        self.wrapped_rows = items.iter().map(ListItem::height).sum();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.list_state);
        self.render_scrollbar(frame, area);
    }
}

/// Inspectors report nothing back to the host; the host closes them on Esc.
impl EventHandler for LineView {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => self.scroll(ScrollDirection::Up, 1),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.scroll(ScrollDirection::Down, 1)
            }
            TuiEvent::PageUp => self.scroll_page(ScrollDirection::Up),
            TuiEvent::PageDown => self.scroll_page(ScrollDirection::Down),
            TuiEvent::Home => self.scroll_to_top(),
            TuiEvent::End => self.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}
