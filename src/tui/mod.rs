//! # TUI Adapter
//!
//! The ratatui-specific layer: overlays, formatters, terminal I/O, and a
//! small host loop that drives them.
//!
//! ## Overlays
//!
//! At most one overlay is open at a time, stored in `TuiState::overlay`.
//! Opening one builds it from scratch; closing it drops it.
//!
//! ```text
//! G  → Overlay::Goto(GotoMenu)           returns MenuAction → core::action::update
//! H  → Overlay::Help(LineView)           display only
//! U  → Overlay::StatusSource(LineView)   display only
//! E  → Overlay::StackTrace(LineView)     display only
//! ```
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to 500ms waiting for input and only redraws after an
//! event. Nothing here animates.

pub mod component;
pub mod components;
pub mod event;
pub mod formatters;
pub mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::{MenuAction, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{GotoMenu, LineView};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// A modal view drawn over the main screen.
pub enum Overlay {
    StatusSource(LineView),
    StackTrace(LineView),
    Help(LineView),
    Goto(GotoMenu),
}

/// What an overlay asks of the host after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Close,
    Navigate(MenuAction),
}

impl Overlay {
    pub fn name(&self) -> &'static str {
        match self {
            Overlay::StatusSource(_) => "status source",
            Overlay::StackTrace(_) => "stack trace",
            Overlay::Help(_) => "help",
            Overlay::Goto(_) => "goto menu",
        }
    }
}

impl Component for Overlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::StatusSource(view) | Overlay::StackTrace(view) | Overlay::Help(view) => {
                view.render(frame, area)
            }
            Overlay::Goto(menu) => menu.render(frame, area),
        }
    }
}

impl EventHandler for Overlay {
    type Event = OverlayEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match self {
            Overlay::Goto(menu) => match event {
                TuiEvent::Escape => Some(OverlayEvent::Close),
                TuiEvent::InputChar('q' | 'Q') if !menu.is_editing() => Some(OverlayEvent::Close),
                _ => menu.handle_event(event).map(OverlayEvent::Navigate),
            },
            Overlay::StatusSource(view) | Overlay::StackTrace(view) | Overlay::Help(view) => {
                match event {
                    TuiEvent::Escape | TuiEvent::InputChar('q' | 'Q') => Some(OverlayEvent::Close),
                    _ => {
                        view.handle_event(event);
                        None
                    }
                }
            }
        }
    }
}

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub overlay: Option<Overlay>,
    pub overlay_width_percent: u16,
    pub overlay_height_percent: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            overlay: None,
            overlay_width_percent: config.overlay_width_percent,
            overlay_height_percent: config.overlay_height_percent,
        }
    }

    fn open(&mut self, overlay: Overlay) {
        debug!("Opening {} overlay", overlay.name());
        self.overlay = Some(overlay);
    }
}

/// Apply one event to the host. Returns `true` when the app should quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> bool {
    if matches!(event, TuiEvent::ForceQuit) {
        return true;
    }

    // An open overlay gets every event
    if let Some(overlay) = tui.overlay.as_mut() {
        match overlay.handle_event(event) {
            Some(OverlayEvent::Close) => {
                debug!("Closing {} overlay", overlay.name());
                tui.overlay = None;
            }
            Some(OverlayEvent::Navigate(action)) => {
                update(app, action);
                tui.overlay = None;
            }
            None => {}
        }
        return false;
    }

    let TuiEvent::InputChar(c) = event else {
        return false;
    };
    match c.to_ascii_lowercase() {
        'q' => return true,
        'g' => tui.open(Overlay::Goto(GotoMenu::new())),
        'h' | '?' => tui.open(Overlay::Help(LineView::help(crate::VERSION))),
        'u' => match &app.status {
            Some(status) => tui.open(Overlay::StatusSource(LineView::status_source(status))),
            None => app.status_message = "No status loaded (start with --status <PATH>)".to_string(),
        },
        'e' => match &app.last_error {
            Some(error) => tui.open(Overlay::StackTrace(LineView::stack_trace(error))),
            None => app.status_message = "No errors so far".to_string(),
        },
        _ => {}
    }
    false
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: &ResolvedConfig, mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Drain everything pending before the next draw
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                if handle_event(&mut app, &mut tui, &event) {
                    info!("Quitting on {:?}", event);
                    return Ok(());
                }
            }
        }
    });
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_record::ErrorRecord;
    use crate::core::state::Timeline;
    use crate::test_support::sample_status;

    fn host() -> (App, TuiState) {
        (App::new(), TuiState::new(&ResolvedConfig::default()))
    }

    fn press(app: &mut App, tui: &mut TuiState, keys: &str) {
        for c in keys.chars() {
            handle_event(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_goto_menu_switches_timeline_and_closes() {
        let (mut app, mut tui) = host();
        press(&mut app, &mut tui, "g");
        assert!(matches!(tui.overlay, Some(Overlay::Goto(_))));

        // Down twice lands on Global public
        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, &TuiEvent::Submit);

        assert!(tui.overlay.is_none());
        assert_eq!(app.timeline, Timeline::Public { local: false });
    }

    #[test]
    fn test_goto_menu_hashtag_flow() {
        let (mut app, mut tui) = host();
        press(&mut app, &mut tui, "g");
        handle_event(&mut app, &mut tui, &TuiEvent::End);
        // Blank hashtag: menu stays open with the input focused
        handle_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert!(matches!(&tui.overlay, Some(Overlay::Goto(menu)) if menu.is_editing()));

        // 'q' is text while editing
        press(&mut app, &mut tui, "quiz");
        handle_event(&mut app, &mut tui, &TuiEvent::NextItem);
        handle_event(&mut app, &mut tui, &TuiEvent::Submit);

        assert!(tui.overlay.is_none());
        assert_eq!(
            app.timeline,
            Timeline::Hashtag {
                tag: "quiz".to_string(),
                local: true
            }
        );
    }

    #[test]
    fn test_escape_closes_without_switching() {
        let (mut app, mut tui) = host();
        press(&mut app, &mut tui, "g");
        assert!(!handle_event(&mut app, &mut tui, &TuiEvent::Escape));
        assert!(tui.overlay.is_none());
        assert_eq!(app.timeline, Timeline::Home);
    }

    #[test]
    fn test_status_source_needs_loaded_status() {
        let (mut app, mut tui) = host();
        press(&mut app, &mut tui, "u");
        assert!(tui.overlay.is_none());
        assert!(app.status_message.contains("--status"));

        app.status = Some(sample_status());
        press(&mut app, &mut tui, "U");
        assert!(matches!(tui.overlay, Some(Overlay::StatusSource(_))));
        press(&mut app, &mut tui, "q");
        assert!(tui.overlay.is_none());
    }

    #[test]
    fn test_error_inspector_opens_last_error() {
        let (mut app, mut tui) = host();
        app.record_error(ErrorRecord::new("Timeout", "slow server"));
        press(&mut app, &mut tui, "e");
        let Some(Overlay::StackTrace(view)) = &tui.overlay else {
            panic!("expected stack trace overlay");
        };
        assert_eq!(view.text().plain_line(0).as_deref(), Some("Timeout: slow server"));
    }

    #[test]
    fn test_help_scrolls_and_quit_keys() {
        let (mut app, mut tui) = host();
        press(&mut app, &mut tui, "h");
        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
        let Some(Overlay::Help(view)) = &tui.overlay else {
            panic!("expected help overlay");
        };
        assert_eq!(view.current_focus(), Some(1));

        // q closes the overlay first, then quits
        assert!(!handle_event(&mut app, &mut tui, &TuiEvent::InputChar('q')));
        assert!(handle_event(&mut app, &mut tui, &TuiEvent::InputChar('q')));
        assert!(handle_event(&mut app, &mut tui, &TuiEvent::ForceQuit));
    }
}
