//! # Actions
//!
//! The navigation menu never switches timelines itself. It hands back a
//! `MenuAction` and the host applies it here:
//!
//! ```text
//! GotoMenu::activate_item()  →  Option<MenuAction>  →  update(app, action)
//! ```
//!
//! `update()` only touches `App`. Fetching the new timeline is someone else's job.

use log::info;

use crate::core::state::{App, Timeline};

/// Outcome of a successful menu activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    HomeTimeline,
    PublicTimeline { local: bool },
    HashtagTimeline { tag: String, local: bool },
}

impl From<MenuAction> for Timeline {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::HomeTimeline => Timeline::Home,
            MenuAction::PublicTimeline { local } => Timeline::Public { local },
            MenuAction::HashtagTimeline { tag, local } => Timeline::Hashtag { tag, local },
        }
    }
}

/// Apply a menu action to the host state.
pub fn update(app: &mut App, action: MenuAction) {
    let timeline = Timeline::from(action);
    info!("Switching timeline: {} -> {}", app.timeline, timeline);
    app.status_message = format!("Switched to {timeline}");
    app.timeline = timeline;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_switches_to_hashtag_timeline() {
        let mut app = App::new();
        update(
            &mut app,
            MenuAction::HashtagTimeline {
                tag: "news".to_string(),
                local: true,
            },
        );
        assert_eq!(
            app.timeline,
            Timeline::Hashtag {
                tag: "news".to_string(),
                local: true
            }
        );
        assert!(app.status_message.contains("#news"));
    }

    #[test]
    fn test_update_public_keeps_locality() {
        let mut app = App::new();
        update(&mut app, MenuAction::PublicTimeline { local: false });
        assert_eq!(app.timeline, Timeline::Public { local: false });

        update(&mut app, MenuAction::HomeTimeline);
        assert_eq!(app.timeline, Timeline::Home);
    }
}
