//! Bulk close confirmation with an optional closure reason

use crate::constants::DEFAULT_CLOSURE_REASON;
use crate::entities::Session;
use crate::icons::IconService;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};

/// Confirmation for closing a batch of sessions with an optional reason
#[derive(Debug, Default)]
pub struct CloseAllDialog {
    sessions: Vec<Session>,
    reason: String,
    cursor_position: usize,
    confirmed: bool,
    closing: bool,
}

/// Reason actually sent to the backend for the text the operator typed
pub fn closure_reason(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_CLOSURE_REASON.to_string()
    } else {
        trimmed.to_string()
    }
}

impl CloseAllDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, sessions: Vec<Session>) {
        *self = Self {
            sessions,
            ..Self::default()
        };
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn closing(&self) -> bool {
        self.closing
    }

    pub fn toggle_confirm(&mut self) {
        if !self.closing {
            self.confirmed = !self.confirmed;
        }
    }

    pub fn submit(&mut self) -> Action {
        if !self.confirmed || self.closing || self.sessions.is_empty() {
            return Action::None;
        }
        self.closing = true;
        Action::ConfirmCloseAll {
            sessions: self.sessions.clone(),
            closure_reason: closure_reason(&self.reason),
        }
    }

    pub fn settle(&mut self) {
        self.closing = false;
    }

    /// Returns `false` while the close request is in flight
    pub fn dismiss(&mut self) -> bool {
        if self.closing {
            return false;
        }
        *self = Self::default();
        true
    }

    fn byte_pos(&self) -> usize {
        self.reason
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.closing {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => {
                if self.dismiss() {
                    Action::HideDialog
                } else {
                    Action::None
                }
            }
            KeyCode::Tab => {
                self.toggle_confirm();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) => {
                let byte_pos = self.byte_pos();
                self.reason.insert(byte_pos, c);
                self.cursor_position += 1;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.byte_pos();
                    self.reason.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.reason.chars().count() {
                    let byte_pos = self.byte_pos();
                    self.reason.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.reason.chars().count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.reason.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, icons: &IconService) {
        let dialog_area = LayoutManager::centered_rect_lines(60, 11, area);
        f.render_widget(Clear, dialog_area);

        let block = create_dialog_block(format!(" {} Close Sessions ", icons.warning()), Color::Yellow);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let summary = match self.sessions.len() {
            1 => "Close 1 session?".to_string(),
            n => format!("Close {} sessions?", n),
        };
        f.render_widget(Paragraph::new(summary).style(Style::default().fg(Color::White)), chunks[0]);

        f.render_widget(
            create_input_paragraph(&self.reason, self.cursor_position, "Closure reason (optional)"),
            chunks[1],
        );

        let checkbox = Line::from(vec![
            Span::raw(icons.checkbox(self.confirmed)),
            Span::raw(" Close the selected sessions"),
        ]);
        f.render_widget(Paragraph::new(checkbox).style(Style::default().fg(Color::White)), chunks[2]);

        if self.closing {
            f.render_widget(
                Paragraph::new("Closing...").style(Style::default().fg(Color::Gray)),
                chunks[3],
            );
        }

        f.render_widget(
            create_instructions_paragraph(&[
                shortcuts::TAB_TOGGLE,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_CONFIRM,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ]),
            chunks[4],
        );
    }
}
