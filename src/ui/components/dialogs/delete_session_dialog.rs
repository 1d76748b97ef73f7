//! Single-session delete confirmation.
//!
//! The dialog is an explicit state machine. Every [`DeleteSessionDialog::open`]
//! starts from scratch, the confirmation checkbox must be ticked before the
//! delete control does anything, and the in-flight guard keeps a second
//! request from going out while the first is still being handled.

use crate::config::DisplayConfig;
use crate::constants::{DELETE_IRREVERSIBLE_NOTICE, DELETE_RESTRICTED_NOTICE};
use crate::eligibility;
use crate::entities::Session;
use crate::icons::IconService;
use crate::ui::components::status_badge::create_status_badge;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph, field_line, shortcuts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteDialogState {
    #[default]
    Closed,
    /// The session is busy; only dismissing is possible
    OpenRestricted,
    OpenUnrestricted { confirmed: bool },
    /// A delete request is in flight
    Submitting,
}

#[derive(Debug, Default)]
pub struct DeleteSessionDialog {
    /// Never `Submitting`; that state is reported from `deleting`
    state: DeleteDialogState,
    deleting: bool,
    session: Option<Session>,
}

impl DeleteSessionDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeleteDialogState {
        if self.deleting {
            DeleteDialogState::Submitting
        } else {
            self.state
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state() != DeleteDialogState::Closed
    }

    pub fn confirmed(&self) -> bool {
        matches!(self.state(), DeleteDialogState::OpenUnrestricted { confirmed: true })
    }

    pub fn deleting(&self) -> bool {
        self.deleting
    }

    /// Open for `session`, discarding whatever the previous opening left behind
    pub fn open(&mut self, session: Session) {
        self.state = if eligibility::is_restricted(Some(&session)) {
            DeleteDialogState::OpenRestricted
        } else {
            DeleteDialogState::OpenUnrestricted { confirmed: false }
        };
        self.deleting = false;
        self.session = Some(session);
    }

    pub fn toggle_confirm(&mut self) {
        if let DeleteDialogState::OpenUnrestricted { confirmed } = self.state() {
            self.state = DeleteDialogState::OpenUnrestricted { confirmed: !confirmed };
        }
    }

    /// Emit `ConfirmDelete` for the session, at most once per in-flight request
    pub fn submit(&mut self) -> Action {
        let confirmed = self.confirmed();
        match eligibility::request_delete(self.session.as_ref(), confirmed, &mut self.deleting) {
            Some(session) => Action::ConfirmDelete(session.clone()),
            None => Action::None,
        }
    }

    /// The delete request finished. The session stays confirmed so a failed
    /// request can be retried by submitting again.
    pub fn settle(&mut self) {
        if self.deleting {
            eligibility::release(&mut self.deleting);
            self.state = DeleteDialogState::OpenUnrestricted { confirmed: true };
        }
    }

    /// Close without emitting anything. Returns `false` while a request is in flight.
    pub fn dismiss(&mut self) -> bool {
        if self.deleting() {
            return false;
        }
        self.state = DeleteDialogState::Closed;
        self.session = None;
        true
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => {
                if self.dismiss() {
                    Action::HideDialog
                } else {
                    Action::None
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('c') => {
                self.toggle_confirm();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, icons: &IconService, display: &DisplayConfig) {
        let Some(session) = &self.session else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect_lines(60, 14, area);
        f.render_widget(Clear, dialog_area);

        let block = create_dialog_block(format!(" {} Delete Session ", icons.warning()), Color::Red);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let details = vec![
            field_line("Name", Span::styled(session.name.clone(), Style::default().add_modifier(Modifier::BOLD))),
            field_line("Status", create_status_badge(session.status.as_ref(), icons)),
            field_line("Created", Span::raw(session.created_display(&display.date_format))),
            field_line("Employees", Span::raw(session.records_display())),
        ];
        f.render_widget(Paragraph::new(details).style(Style::default().fg(Color::White)), chunks[0]);

        let restricted = self.state() == DeleteDialogState::OpenRestricted;
        let checkbox_style = if restricted {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let checkbox = Line::from(vec![
            Span::styled(icons.checkbox(self.confirmed() || self.deleting()), checkbox_style),
            Span::styled(" I understand this session will be permanently deleted", checkbox_style),
        ]);
        f.render_widget(Paragraph::new(checkbox), chunks[1]);

        let (notice, notice_color) = if restricted {
            (format!("{} {}", icons.locked(), DELETE_RESTRICTED_NOTICE), Color::Yellow)
        } else if self.deleting() {
            ("Deleting...".to_string(), Color::Gray)
        } else {
            (DELETE_IRREVERSIBLE_NOTICE.to_string(), Color::Red)
        };
        f.render_widget(
            Paragraph::new(notice)
                .style(Style::default().fg(notice_color))
                .wrap(Wrap { trim: true }),
            chunks[2],
        );

        let instructions = if restricted {
            create_instructions_paragraph(&[shortcuts::ESC_CLOSE])
        } else if self.deleting() {
            Paragraph::new("")
        } else {
            create_instructions_paragraph(&[
                shortcuts::SPACE_TOGGLE,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_DELETE,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ])
        };
        f.render_widget(instructions, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SessionStatus;
    use crossterm::event::KeyModifiers;

    fn session(status: &str) -> Session {
        Session::new("March payroll", Some(SessionStatus::parse(status)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_resets_confirmation() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("COMPLETED"));
        dialog.toggle_confirm();
        assert!(dialog.confirmed());

        assert!(dialog.dismiss());
        dialog.open(session("COMPLETED"));
        assert!(!dialog.confirmed());
        assert!(!dialog.deleting());
    }

    #[test]
    fn test_reopen_after_failed_request_starts_clean() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("COMPLETED"));
        dialog.toggle_confirm();
        dialog.submit();
        dialog.settle();
        assert!(dialog.dismiss());

        dialog.open(session("FAILED"));
        assert_eq!(dialog.state(), DeleteDialogState::OpenUnrestricted { confirmed: false });
    }

    #[test]
    fn test_completed_and_confirmed_emits_once() {
        let s = session("COMPLETED");
        let id = s.id;
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(s);
        dialog.toggle_confirm();

        match dialog.submit() {
            Action::ConfirmDelete(emitted) => assert_eq!(emitted.id, id),
            other => panic!("expected ConfirmDelete, got {other:?}"),
        }
        assert!(matches!(dialog.submit(), Action::None));
        assert!(dialog.deleting());
    }

    #[test]
    fn test_processing_is_noop_even_when_toggled() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("processing"));
        assert_eq!(dialog.state(), DeleteDialogState::OpenRestricted);

        dialog.toggle_confirm();
        assert!(!dialog.confirmed());
        assert!(matches!(dialog.submit(), Action::None));
        assert_eq!(dialog.state(), DeleteDialogState::OpenRestricted);
    }

    #[test]
    fn test_unconfirmed_submit_is_noop() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("COMPLETED"));
        assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
        assert!(!dialog.deleting());
    }

    #[test]
    fn test_dismiss_blocked_while_submitting() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("COMPLETED"));
        dialog.handle_key_events(key(KeyCode::Char(' ')));
        dialog.handle_key_events(key(KeyCode::Enter));

        assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
        assert!(dialog.is_open());

        dialog.settle();
        assert!(dialog.confirmed());
        assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
        assert!(!dialog.is_open());
        assert!(dialog.session().is_none());
    }

    #[test]
    fn test_retry_after_settle() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("FAILED"));
        dialog.toggle_confirm();
        assert!(matches!(dialog.submit(), Action::ConfirmDelete(_)));
        dialog.settle();
        assert!(matches!(dialog.submit(), Action::ConfirmDelete(_)));
    }

    #[test]
    fn test_missing_status_is_deletable() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(Session::new("Imported", None));
        dialog.toggle_confirm();
        assert!(matches!(dialog.submit(), Action::ConfirmDelete(_)));
    }

    #[test]
    fn test_confirmation_frozen_while_submitting() {
        let mut dialog = DeleteSessionDialog::new();
        dialog.open(session("COMPLETED"));
        dialog.toggle_confirm();
        dialog.submit();

        dialog.toggle_confirm();
        assert_eq!(dialog.state(), DeleteDialogState::Submitting);

        dialog.settle();
        assert!(!dialog.deleting());
        assert_eq!(dialog.state(), DeleteDialogState::OpenUnrestricted { confirmed: true });
    }
}
