use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;

const KEY_HINTS: &str = " G Go to  H Help  U Status source  E Last error  Q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    let title = Line::from(vec![
        Span::styled(
            "toot",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | {}", app.timeline)),
    ]);
    frame.render_widget(title, title_area);

    draw_timeline_placeholder(frame, main_area, app);

    let status_text = if app.status_message.is_empty() {
        KEY_HINTS.to_string()
    } else {
        format!(" {}", app.status_message)
    };
    frame.render_widget(
        Span::styled(status_text, Style::default().fg(Color::DarkGray)),
        status_area,
    );

    let overlay_area = centered_rect(
        tui.overlay_width_percent,
        tui.overlay_height_percent,
        main_area,
    );
    if let Some(overlay) = tui.overlay.as_mut() {
        overlay.render(frame, overlay_area);
    }
}

/// The real timeline renderer lives elsewhere; this just says what would be shown.
fn draw_timeline_placeholder(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(format!("Showing {}", app.timeline))];
    if app.status.is_some() {
        lines.push(Line::styled(
            "A status is loaded, press U to inspect it.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
