//! # Goto Menu Component
//!
//! Overlay for switching timelines. Opened with `G`.
//!
//! The menu is a fixed table of seven rows:
//!
//! ```text
//! 0  Home timeline             → HomeTimeline
//! 1  Local public timeline     → PublicTimeline { local: true }
//! 2  Global public timeline    → PublicTimeline { local: false }
//! 3  ─ divider (never focused)
//! 4  Hashtag: ____             text input
//! 5  Local hashtag timeline    → HashtagTimeline { tag, local: true }
//! 6  Public hashtag timeline   → HashtagTimeline { tag, local: false }
//! ```
//!
//! Activation returns the `MenuAction` straight to the caller. The hashtag
//! buttons need a non-blank hashtag; when it's blank they move focus to the
//! input row and return nothing.

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::action::MenuAction;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::edit_box::EditBox;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Home,
    LocalPublic,
    GlobalPublic,
    LocalHashtag,
    PublicHashtag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Button(ButtonAction, &'static str),
    Divider,
    HashtagInput,
}

impl MenuItem {
    pub fn is_focusable(self) -> bool {
        !matches!(self, MenuItem::Divider)
    }
}

pub const MENU_ITEMS: [MenuItem; 7] = [
    MenuItem::Button(ButtonAction::Home, "Home timeline"),
    MenuItem::Button(ButtonAction::LocalPublic, "Local public timeline"),
    MenuItem::Button(ButtonAction::GlobalPublic, "Global public timeline"),
    MenuItem::Divider,
    MenuItem::HashtagInput,
    MenuItem::Button(ButtonAction::LocalHashtag, "Local hashtag timeline"),
    MenuItem::Button(ButtonAction::PublicHashtag, "Public hashtag timeline"),
];

pub const HASHTAG_INPUT_INDEX: usize = 4;

pub struct GotoMenu {
    hashtag: EditBox,
    list_state: ListState,
}

impl Default for GotoMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl GotoMenu {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            hashtag: EditBox::new("Hashtag: "),
            list_state,
        }
    }

    pub fn focus(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Focus `index` if it names a focusable item; anything else is ignored.
    pub fn set_focus(&mut self, index: usize) {
        if MENU_ITEMS.get(index).is_some_and(|item| item.is_focusable()) {
            self.list_state.select(Some(index));
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(next) = (self.focus() + 1..MENU_ITEMS.len()).find(|&i| MENU_ITEMS[i].is_focusable()) {
            self.set_focus(next);
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(prev) = (0..self.focus()).rev().find(|&i| MENU_ITEMS[i].is_focusable()) {
            self.set_focus(prev);
        }
    }

    /// Current hashtag input with surrounding whitespace trimmed.
    pub fn hashtag(&self) -> &str {
        self.hashtag.text().trim()
    }

    pub fn hashtag_input(&mut self) -> &mut EditBox {
        &mut self.hashtag
    }

    /// True while the hashtag input has focus and keys are text, not commands.
    pub fn is_editing(&self) -> bool {
        self.focus() == HASHTAG_INPUT_INDEX
    }

    /// Focus item `index` and run its action.
    ///
    /// Returns `Some` exactly when the interaction is over and the host
    /// should switch timelines. The divider, the input row and indices past
    /// the end return `None`.
    pub fn activate_item(&mut self, index: usize) -> Option<MenuAction> {
        let item = *MENU_ITEMS.get(index)?;
        self.set_focus(index);

        let MenuItem::Button(action, _) = item else {
            return None;
        };
        match action {
            ButtonAction::Home => Some(MenuAction::HomeTimeline),
            ButtonAction::LocalPublic => Some(MenuAction::PublicTimeline { local: true }),
            ButtonAction::GlobalPublic => Some(MenuAction::PublicTimeline { local: false }),
            ButtonAction::LocalHashtag => self.hashtag_action(true),
            ButtonAction::PublicHashtag => self.hashtag_action(false),
        }
    }

    pub fn activate_focused(&mut self) -> Option<MenuAction> {
        self.activate_item(self.focus())
    }

    fn hashtag_action(&mut self, local: bool) -> Option<MenuAction> {
        let tag = self.hashtag();
        if tag.is_empty() {
            debug!("Hashtag button activated with empty input, focusing input");
            self.set_focus(HASHTAG_INPUT_INDEX);
            return None;
        }
        info!("Goto hashtag timeline #{} (local: {})", tag, local);
        Some(MenuAction::HashtagTimeline {
            tag: tag.to_string(),
            local,
        })
    }
}

impl EventHandler for GotoMenu {
    type Event = MenuAction;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::PrevItem => {
                self.focus_prev();
                None
            }
            TuiEvent::CursorDown | TuiEvent::NextItem => {
                self.focus_next();
                None
            }
            TuiEvent::Submit => self.activate_focused(),
            _ if self.is_editing() => {
                self.hashtag.handle_event(event);
                None
            }
            TuiEvent::InputChar('k') => {
                self.focus_prev();
                None
            }
            TuiEvent::InputChar('j') => {
                self.focus_next();
                None
            }
            TuiEvent::InputChar(' ') => self.activate_focused(),
            TuiEvent::Home => {
                self.set_focus(0);
                None
            }
            TuiEvent::End => {
                self.set_focus(MENU_ITEMS.len() - 1);
                None
            }
            _ => None,
        }
    }
}

impl Component for GotoMenu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Go to ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let focused_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| match item {
                MenuItem::Button(_, label) => ListItem::new(Line::from(*label)),
                MenuItem::Divider => ListItem::new(Line::default()),
                MenuItem::HashtagInput => ListItem::new(Line::from(vec![
                    Span::styled(self.hashtag.caption(), Style::default().fg(Color::Gray)),
                    Span::raw(self.hashtag.text().to_string()),
                ])),
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(focused_style);
        frame.render_stateful_widget(list, area, &mut self.list_state);

        if self.focus() == HASHTAG_INPUT_INDEX {
            let row = HASHTAG_INPUT_INDEX.saturating_sub(self.list_state.offset());
            if let Ok(row) = u16::try_from(row)
                && row < inner.height
            {
                let x = (inner.x + self.hashtag.cursor_column()).min(inner.right().saturating_sub(1));
                frame.set_cursor_position((x, inner.y + row));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn menu_with_hashtag(text: &str) -> GotoMenu {
        let mut menu = GotoMenu::new();
        menu.hashtag_input().set_text(text);
        menu
    }

    #[test]
    fn test_initial_focus_is_first_button() {
        assert_eq!(GotoMenu::new().focus(), 0);
    }

    #[test]
    fn test_direct_buttons() {
        let mut menu = GotoMenu::new();
        assert_eq!(menu.activate_item(0), Some(MenuAction::HomeTimeline));
        assert_eq!(
            menu.activate_item(1),
            Some(MenuAction::PublicTimeline { local: true })
        );
        assert_eq!(
            menu.activate_item(2),
            Some(MenuAction::PublicTimeline { local: false })
        );
        assert_eq!(menu.focus(), 2);
    }

    #[test]
    fn test_home_ignores_focus_history() {
        let mut menu = menu_with_hashtag("   ");
        menu.activate_item(6);
        menu.focus_next();
        menu.set_focus(2);
        assert_eq!(menu.activate_item(0), Some(MenuAction::HomeTimeline));
    }

    #[test]
    fn test_hashtag_buttons_emit_trimmed_tag() {
        let mut menu = menu_with_hashtag("  news ");
        assert_eq!(
            menu.activate_item(5),
            Some(MenuAction::HashtagTimeline {
                tag: "news".to_string(),
                local: true
            })
        );
        assert_eq!(
            menu.activate_item(6),
            Some(MenuAction::HashtagTimeline {
                tag: "news".to_string(),
                local: false
            })
        );
    }

    #[test]
    fn test_blank_hashtag_refocuses_input() {
        for text in ["", "   "] {
            for index in [5, 6] {
                let mut menu = menu_with_hashtag(text);
                assert_eq!(menu.activate_item(index), None);
                assert_eq!(menu.focus(), HASHTAG_INPUT_INDEX);
            }
        }
    }

    #[test]
    fn test_non_button_items_do_nothing() {
        let mut menu = GotoMenu::new();
        assert_eq!(menu.activate_item(3), None);
        assert_eq!(menu.focus(), 0, "divider never takes focus");
        assert_eq!(menu.activate_item(HASHTAG_INPUT_INDEX), None);
        assert_eq!(menu.focus(), HASHTAG_INPUT_INDEX);
        assert_eq!(menu.activate_item(99), None);
        assert_eq!(menu.focus(), HASHTAG_INPUT_INDEX);
    }

    #[test]
    fn test_focus_skips_divider_and_clamps() {
        let mut menu = GotoMenu::new();
        menu.focus_prev();
        assert_eq!(menu.focus(), 0);

        menu.set_focus(2);
        menu.focus_next();
        assert_eq!(menu.focus(), HASHTAG_INPUT_INDEX);
        menu.focus_prev();
        assert_eq!(menu.focus(), 2);

        menu.set_focus(6);
        menu.focus_next();
        assert_eq!(menu.focus(), 6);
    }

    #[test]
    fn test_typing_goes_to_input_only_when_focused() {
        let mut menu = GotoMenu::new();
        menu.handle_event(&TuiEvent::InputChar('j'));
        assert_eq!(menu.focus(), 1, "j moves focus on buttons");
        assert_eq!(menu.hashtag(), "");

        menu.set_focus(HASHTAG_INPUT_INDEX);
        for c in "jazz".chars() {
            menu.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(menu.hashtag(), "jazz");
        assert_eq!(menu.focus(), HASHTAG_INPUT_INDEX);
    }

    #[test]
    fn test_enter_flow_through_events() {
        let mut menu = GotoMenu::new();
        menu.set_focus(6);
        assert_eq!(menu.handle_event(&TuiEvent::Submit), None);
        assert_eq!(menu.focus(), HASHTAG_INPUT_INDEX);

        for c in "rust".chars() {
            menu.handle_event(&TuiEvent::InputChar(c));
        }
        menu.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            menu.handle_event(&TuiEvent::Submit),
            Some(MenuAction::HashtagTimeline {
                tag: "rust".to_string(),
                local: true
            })
        );
    }

    #[test]
    fn test_space_activates_buttons() {
        let mut menu = GotoMenu::new();
        assert_eq!(
            menu.handle_event(&TuiEvent::InputChar(' ')),
            Some(MenuAction::HomeTimeline)
        );
    }

    #[test]
    fn test_render_lists_all_rows() {
        let mut menu = menu_with_hashtag("news");
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|f| menu.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Go to"));
        assert!(text.contains("Global public timeline"));
        assert!(text.contains("Hashtag: news"));
        assert!(text.contains("Public hashtag timeline"));
    }
}
