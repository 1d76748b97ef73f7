//! Modal dialog component.
//!
//! Dialogs are kept on a stack so that an error raised while a dialog is
//! open (a failed delete, say) is shown on top of it. Closing the error
//! returns to the dialog underneath with its state intact.

use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::ui::components::dialogs::{system_dialogs, CloseAllDialog, DeleteSessionDialog, Scroll};

/// Modal dialog container.
///
/// # Dialog Types
/// - **Delete session** - single-session delete with confirmation and restriction gate
/// - **Bulk delete** - confirmation listing the eligible selected sessions
/// - **Close sessions** - closure reason input with confirmation
/// - **System dialogs** - error, info, help and logs
pub struct DialogComponent {
    stack: Vec<DialogType>,
    pub delete_dialog: DeleteSessionDialog,
    pub close_all_dialog: CloseAllDialog,
    pub icons: IconService,
    pub display_config: DisplayConfig,
    logger: Option<Logger>,
    scroll: Scroll,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            delete_dialog: DeleteSessionDialog::new(),
            close_all_dialog: CloseAllDialog::new(),
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
            logger: None,
            scroll: Scroll::default(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    pub fn is_visible(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The dialog currently receiving keys
    pub fn top(&self) -> Option<&DialogType> {
        self.stack.last()
    }

    pub fn show(&mut self, dialog: DialogType) {
        match &dialog {
            DialogType::DeleteSession(session) => self.delete_dialog.open(session.clone()),
            DialogType::CloseAllSessions(sessions) => self.close_all_dialog.open(sessions.clone()),
            _ => {}
        }
        self.scroll.reset();
        self.stack.push(dialog);
    }

    /// Close the top dialog. Dialogs with a request in flight stay open.
    pub fn hide(&mut self) {
        let allowed = match self.stack.last() {
            Some(DialogType::DeleteSession(_)) => self.delete_dialog.dismiss(),
            Some(DialogType::CloseAllSessions(_)) => self.close_all_dialog.dismiss(),
            Some(_) => true,
            None => false,
        };
        if allowed {
            self.stack.pop();
            self.scroll.reset();
        }
    }

    /// Remove a specific dialog kind wherever it sits in the stack
    fn remove_where(&mut self, predicate: impl Fn(&DialogType) -> bool) {
        self.stack.retain(|dialog| !predicate(dialog));
    }

    /// The delete request finished. On success the dialog closes; on failure
    /// it stays open and confirmed, ready for another attempt.
    pub fn settle_delete(&mut self, success: bool) {
        self.delete_dialog.settle();
        if success {
            self.delete_dialog.dismiss();
            self.remove_where(|dialog| matches!(dialog, DialogType::DeleteSession(_)));
        }
    }

    pub fn settle_close_all(&mut self, success: bool) {
        self.close_all_dialog.settle();
        if success {
            self.close_all_dialog.dismiss();
            self.remove_where(|dialog| matches!(dialog, DialogType::CloseAllSessions(_)));
        }
    }

    fn clear_dialog(&mut self) {
        self.stack.pop();
        self.scroll.reset();
    }

    fn handle_scrolling_keys(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        if close_keys.contains(&key.code) {
            return Action::HideDialog;
        }
        self.scroll.handle_key(key.code);
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(top) = self.stack.last() else {
            return Action::None;
        };

        match top {
            DialogType::Error(_) | DialogType::Info(_) => {
                if self.scroll.handle_key(key.code) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            DialogType::Help => self.handle_scrolling_keys(key, &[KeyCode::Esc, KeyCode::Char('?')]),
            DialogType::Logs => {
                self.handle_scrolling_keys(key, &[KeyCode::Esc, KeyCode::Char('G'), KeyCode::Char('q')])
            }
            DialogType::DeleteSession(_) => match self.delete_dialog.handle_key_events(key) {
                Action::HideDialog => {
                    self.clear_dialog();
                    Action::None
                }
                action => action,
            },
            DialogType::CloseAllSessions(_) => match self.close_all_dialog.handle_key_events(key) {
                Action::HideDialog => {
                    self.clear_dialog();
                    Action::None
                }
                action => action,
            },
            DialogType::BulkDeleteConfirmation(sessions) => match key.code {
                KeyCode::Enter => {
                    let action = Action::ConfirmBulkDelete(sessions.clone());
                    self.clear_dialog();
                    action
                }
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                Action::CycleIconTheme
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        for index in 0..self.stack.len() {
            let is_top = index + 1 == self.stack.len();
            match &self.stack[index] {
                DialogType::DeleteSession(_) => {
                    self.delete_dialog.render(f, rect, &self.icons, &self.display_config);
                }
                DialogType::CloseAllSessions(_) => self.close_all_dialog.render(f, rect, &self.icons),
                DialogType::BulkDeleteConfirmation(sessions) => {
                    system_dialogs::render_bulk_delete_dialog(f, rect, &self.icons, sessions);
                }
                // Scroll state belongs to the top dialog only
                DialogType::Error(message) if is_top => {
                    system_dialogs::render_error_dialog(f, rect, &self.icons, message, &mut self.scroll);
                }
                DialogType::Info(message) if is_top => {
                    system_dialogs::render_info_dialog(f, rect, &self.icons, message, &mut self.scroll);
                }
                DialogType::Help if is_top => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
                DialogType::Logs if is_top => {
                    system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Session, SessionStatus};
    use crate::ui::components::dialogs::DeleteDialogState;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn completed() -> Session {
        Session::new("April payroll", Some(SessionStatus::Completed))
    }

    #[test]
    fn test_error_stacks_over_failed_delete() {
        let mut dialogs = DialogComponent::new();
        dialogs.update(Action::ShowDialog(DialogType::DeleteSession(completed())));
        dialogs.handle_key_events(key(KeyCode::Char(' ')));
        assert!(matches!(dialogs.handle_key_events(key(KeyCode::Enter)), Action::ConfirmDelete(_)));

        dialogs.settle_delete(false);
        dialogs.update(Action::ShowDialog(DialogType::Error("boom".to_string())));
        assert!(matches!(dialogs.top(), Some(DialogType::Error(_))));

        let action = dialogs.handle_key_events(key(KeyCode::Char('x')));
        dialogs.update(action);
        assert!(matches!(dialogs.top(), Some(DialogType::DeleteSession(_))));
        assert_eq!(dialogs.delete_dialog.state(), DeleteDialogState::OpenUnrestricted { confirmed: true });
    }

    #[test]
    fn test_successful_delete_closes_dialog() {
        let mut dialogs = DialogComponent::new();
        dialogs.show(DialogType::DeleteSession(completed()));
        dialogs.delete_dialog.toggle_confirm();
        dialogs.delete_dialog.submit();

        dialogs.settle_delete(true);
        assert!(!dialogs.is_visible());
        assert!(!dialogs.delete_dialog.is_open());
    }

    #[test]
    fn test_hide_blocked_while_submitting() {
        let mut dialogs = DialogComponent::new();
        dialogs.show(DialogType::DeleteSession(completed()));
        dialogs.delete_dialog.toggle_confirm();
        dialogs.delete_dialog.submit();

        dialogs.update(Action::HideDialog);
        assert!(dialogs.is_visible());
    }

    #[test]
    fn test_escape_closes_delete_dialog() {
        let mut dialogs = DialogComponent::new();
        dialogs.show(DialogType::DeleteSession(completed()));
        assert!(matches!(dialogs.handle_key_events(key(KeyCode::Esc)), Action::None));
        assert!(!dialogs.is_visible());
    }

    #[test]
    fn test_bulk_delete_enter_confirms_and_closes() {
        let mut dialogs = DialogComponent::new();
        dialogs.show(DialogType::BulkDeleteConfirmation(vec![completed(), completed()]));

        match dialogs.handle_key_events(key(KeyCode::Enter)) {
            Action::ConfirmBulkDelete(sessions) => assert_eq!(sessions.len(), 2),
            other => panic!("expected ConfirmBulkDelete, got {other:?}"),
        }
        assert!(!dialogs.is_visible());
    }

    #[test]
    fn test_help_closes_on_question_mark() {
        let mut dialogs = DialogComponent::new();
        dialogs.show(DialogType::Help);
        assert!(matches!(dialogs.handle_key_events(key(KeyCode::Char('j'))), Action::None));
        assert!(matches!(dialogs.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));
    }
}
