//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const SHORTCUTS: &str = "Space: select • d: delete • l: line items • r: reload • ?: help • q: quit";

/// What the status bar is currently telling the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    Idle,
    Busy(String),
    Success(String),
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar. `pending_tasks` is the number of backend requests in flight.
    pub fn render(f: &mut Frame, area: Rect, message: &StatusMessage, pending_tasks: usize) {
        let (status_text, status_color) = match message {
            StatusMessage::Busy(text) => (format!("⟳ {}", text), Color::Yellow),
            StatusMessage::Success(text) => (text.clone(), Color::Green),
            StatusMessage::Idle if pending_tasks > 0 => ("⟳ Working...".to_string(), Color::Yellow),
            StatusMessage::Idle => (SHORTCUTS.to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
