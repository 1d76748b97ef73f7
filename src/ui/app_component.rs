use crate::backend::SessionBackend;
use crate::config::Config;
use crate::constants::{
    ERROR_NOTHING_ELIGIBLE, ERROR_SESSIONS_CLOSE_FAILED, ERROR_SESSIONS_EXPORT_FAILED, ERROR_SESSION_DELETE_FAILED,
    SUCCESS_SESSIONS_CLOSED, SUCCESS_SESSIONS_DELETED, SUCCESS_SESSIONS_EXPORTED, SUCCESS_SESSION_DELETED,
};
use crate::eligibility;
use crate::entities::{SelectionStats, Session};
use crate::logger::Logger;
use crate::ui::components::{
    BulkToolbar, DialogComponent, LineItemsComponent, SessionListComponent, StatusBar, StatusMessage,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub sessions: Vec<Session>,
    pub selected_ids: HashSet<Uuid>,
    /// Zero-based
    pub page: usize,
    pub page_size: usize,
    pub loading: bool,
    pub status: StatusMessage,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sessions: Vec::new(),
            selected_ids: HashSet::new(),
            page: 0,
            page_size: page_size.max(1),
            loading: true,
            status: StatusMessage::Idle,
        }
    }

    pub fn page_count(&self) -> usize {
        self.sessions.len().div_ceil(self.page_size)
    }

    pub fn page_sessions(&self) -> &[Session] {
        let start = (self.page * self.page_size).min(self.sessions.len());
        let end = (start + self.page_size).min(self.sessions.len());
        &self.sessions[start..end]
    }

    /// Selected sessions, in list order
    pub fn selected_sessions(&self) -> Vec<Session> {
        self.sessions
            .iter()
            .filter(|session| self.selected_ids.contains(&session.id))
            .cloned()
            .collect()
    }

    /// Selected sessions that bulk delete and close may act on
    pub fn eligible_sessions(&self) -> Vec<Session> {
        self.selected_sessions()
            .into_iter()
            .filter(is_eligible)
            .collect()
    }

    pub fn selection_stats(&self) -> SelectionStats {
        let selected = self.selected_sessions();
        let eligible = selected.iter().filter(|session| is_eligible(session)).count();
        SelectionStats {
            total: self.sessions.len(),
            selected: selected.len(),
            eligible,
            ineligible: selected.len() - eligible,
            pages: self.page_count(),
        }
    }

    pub fn set_sessions(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
        let known: HashSet<Uuid> = self.sessions.iter().map(|session| session.id).collect();
        self.selected_ids.retain(|id| known.contains(id));
        self.page = self.page.min(self.page_count().saturating_sub(1));
        self.loading = false;
    }

    pub fn remove_session(&mut self, id: Uuid) {
        let sessions = self.sessions.iter().filter(|session| session.id != id).cloned().collect();
        self.set_sessions(sessions);
    }
}

fn is_eligible(session: &Session) -> bool {
    !session.is_closed && !eligibility::is_restricted(Some(session))
}

pub struct AppComponent {
    // Component composition
    toolbar: BulkToolbar,
    session_list: SessionListComponent,
    line_items: LineItemsComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn SessionBackend>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new(backend);

        let mut session_list = SessionListComponent::new();
        session_list.icons.set_theme(config.ui.icon_theme);

        let mut line_items = LineItemsComponent::new();
        line_items.display_config = config.display.clone();

        let mut dialog = DialogComponent::new();
        dialog.icons.set_theme(config.ui.icon_theme);
        dialog.update_display_config(config.display.clone());
        dialog.set_logger(logger);

        let mut app = Self {
            toolbar: BulkToolbar::new(),
            session_list,
            line_items,
            dialog,
            state: AppState::new(config.ui.page_size),
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn line_items(&self) -> &LineItemsComponent {
        &self.line_items
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Request the session list on startup
    pub fn trigger_initial_load(&mut self) {
        log::info!("Loading sessions");
        self.task_manager.spawn_load_sessions();
    }

    /// Push the current state into the child components
    fn sync_component_data(&mut self) {
        self.toolbar.update_stats(self.state.selection_stats());
        self.session_list.update_data(
            self.state.page_sessions().to_vec(),
            self.state.selected_ids.clone(),
            self.state.page,
            self.state.page_count(),
            self.state.sessions.len(),
        );
        self.session_list.loading = self.state.loading;
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('r') => {
                log::debug!("Global key: 'r' - reloading sessions");
                Action::ReloadSessions
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NextPage => {
                if self.state.page + 1 < self.state.page_count() {
                    self.state.page += 1;
                }
            }
            Action::PreviousPage => {
                self.state.page = self.state.page.saturating_sub(1);
            }
            Action::ToggleSelected(id) => {
                if !self.state.selected_ids.remove(&id) {
                    self.state.selected_ids.insert(id);
                }
            }
            Action::SelectAllPage => {
                let ids: Vec<Uuid> = self.state.page_sessions().iter().map(|session| session.id).collect();
                self.state.selected_ids.extend(ids);
            }
            Action::SelectAllResults => {
                let ids: Vec<Uuid> = self.state.sessions.iter().map(|session| session.id).collect();
                self.state.selected_ids.extend(ids);
            }
            Action::DeselectAll => {
                self.state.selected_ids.clear();
            }
            Action::DeleteSelected => {
                let eligible = self.state.eligible_sessions();
                if eligible.is_empty() {
                    self.dialog.show(DialogType::Info(ERROR_NOTHING_ELIGIBLE.to_string()));
                } else {
                    self.dialog.show(DialogType::BulkDeleteConfirmation(eligible));
                }
            }
            Action::CloseSelected => {
                let eligible = self.state.eligible_sessions();
                if eligible.is_empty() {
                    self.dialog.show(DialogType::Info(ERROR_NOTHING_ELIGIBLE.to_string()));
                } else {
                    self.dialog.show(DialogType::CloseAllSessions(eligible));
                }
            }
            Action::ExportSelected => {
                let ids: Vec<Uuid> = self.state.selected_sessions().iter().map(|session| session.id).collect();
                if !ids.is_empty() {
                    self.state.status = StatusMessage::Busy(format!("Exporting {} sessions", ids.len()));
                    self.task_manager.spawn_export(ids);
                }
            }
            Action::OpenDeleteSession(session) => {
                self.dialog.show(DialogType::DeleteSession(session));
            }
            Action::OpenLineItems(session) => {
                self.state.status = StatusMessage::Busy(format!("Loading line items for '{}'", session.name));
                self.task_manager.spawn_line_items(session);
            }
            Action::ConfirmDelete(session) => {
                log::info!("Deleting session '{}' ({})", session.name, session.id);
                self.state.status = StatusMessage::Busy(format!("Deleting '{}'", session.name));
                self.task_manager.spawn_delete(session);
            }
            Action::ConfirmBulkDelete(sessions) => {
                log::info!("Deleting {} sessions", sessions.len());
                self.state.status = StatusMessage::Busy(format!("Deleting {} sessions", sessions.len()));
                self.task_manager.spawn_bulk_delete(sessions);
            }
            Action::ConfirmCloseAll {
                sessions,
                closure_reason,
            } => {
                log::info!("Closing {} sessions: {}", sessions.len(), closure_reason);
                self.state.status = StatusMessage::Busy(format!("Closing {} sessions", sessions.len()));
                self.task_manager.spawn_close_all(sessions, closure_reason);
            }
            Action::ReloadSessions => {
                self.state.loading = true;
                self.task_manager.spawn_load_sessions();
            }
            Action::SessionsLoaded(sessions) => {
                log::info!("Loaded {} sessions", sessions.len());
                self.state.set_sessions(sessions);
            }
            Action::DeleteSettled { session_id, outcome } => match outcome {
                Ok(()) => {
                    log::info!("Deleted session {}", session_id);
                    self.dialog.settle_delete(true);
                    self.state.remove_session(session_id);
                    self.state.status = StatusMessage::Success(SUCCESS_SESSION_DELETED.to_string());
                }
                Err(e) => {
                    log::warn!("Deleting session {} failed: {}", session_id, e);
                    self.dialog.settle_delete(false);
                    self.dialog
                        .show(DialogType::Error(format!("{}: {}", ERROR_SESSION_DELETE_FAILED, e)));
                }
            },
            Action::BulkDeleteSettled { deleted, failures } => {
                log::info!("Bulk delete finished: {} deleted, {} failed", deleted, failures.len());
                if deleted > 0 {
                    self.state.status = StatusMessage::Success(format!("{} ({})", SUCCESS_SESSIONS_DELETED, deleted));
                }
                if !failures.is_empty() {
                    self.dialog.show(DialogType::Error(format!(
                        "{}:\n{}",
                        ERROR_SESSION_DELETE_FAILED,
                        failures.join("\n")
                    )));
                }
                self.state.loading = true;
                self.task_manager.spawn_load_sessions();
            }
            Action::CloseAllSettled(outcome) => match outcome {
                Ok(count) => {
                    log::info!("Closed {} sessions", count);
                    self.dialog.settle_close_all(true);
                    self.state.selected_ids.clear();
                    self.state.status = StatusMessage::Success(format!("{} ({})", SUCCESS_SESSIONS_CLOSED, count));
                    self.state.loading = true;
                    self.task_manager.spawn_load_sessions();
                }
                Err(e) => {
                    log::warn!("Closing sessions failed: {}", e);
                    self.dialog.settle_close_all(false);
                    self.dialog
                        .show(DialogType::Error(format!("{}: {}", ERROR_SESSIONS_CLOSE_FAILED, e)));
                }
            },
            Action::ExportSettled(outcome) => match outcome {
                Ok(path) => {
                    log::info!("Exported sessions to {}", path.display());
                    self.dialog
                        .show(DialogType::Info(format!("{} {}", SUCCESS_SESSIONS_EXPORTED, path.display())));
                }
                Err(e) => {
                    log::warn!("Export failed: {}", e);
                    self.dialog
                        .show(DialogType::Error(format!("{}: {}", ERROR_SESSIONS_EXPORT_FAILED, e)));
                }
            },
            _ => {}
        }

        self.sync_component_data();
        Action::None
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        // Finished tasks have already sent their action, so drain after cleanup.
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed_tasks.len());
        }

        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        if !actions.is_empty() && matches!(self.state.status, StatusMessage::Busy(_)) {
            self.state.status = StatusMessage::Idle;
        }

        actions
    }

    /// Route a key to whoever should see it first
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.line_items.is_visible() {
            return self.line_items.handle_key_events(key);
        }

        // A successful result stays on the status bar until the next key
        if matches!(self.state.status, StatusMessage::Success(_)) {
            self.state.status = StatusMessage::Idle;
        }

        let toolbar_action = self.toolbar.handle_key_events(key);
        if !matches!(toolbar_action, Action::None) {
            return toolbar_action;
        }

        let list_action = self.session_list.handle_key_events(key);
        if !matches!(list_action, Action::None) {
            return list_action;
        }

        self.handle_global_key(key)
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.line_items.update(action);
        self.session_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.toolbar.render(f, chunks[0]);
        self.session_list.render(f, chunks[1]);
        StatusBar::render(f, chunks[2], &self.state.status, self.task_manager.task_count());

        if self.line_items.is_visible() {
            self.line_items.render(f, rect);
        }

        // Render dialog on top if visible (includes help dialog)
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
