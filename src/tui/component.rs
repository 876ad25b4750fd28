use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components own whatever presentation state they need (focus, scroll
/// position) and draw themselves into a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can remember layout facts from
/// the last frame, such as the viewport height used for page scrolling.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
