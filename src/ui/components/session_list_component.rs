use crate::entities::Session;
use crate::icons::IconService;
use crate::ui::components::status_badge::create_status_badge;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime::format_created;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Table of the sessions on the current page
pub struct SessionListComponent {
    sessions: Vec<Session>,
    selected_ids: HashSet<Uuid>,
    page: usize,
    pages: usize,
    total: usize,
    pub selected_index: usize,
    pub table_state: TableState,
    pub loading: bool,
    pub icons: IconService,
}

impl Default for SessionListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionListComponent {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            selected_ids: HashSet::new(),
            page: 0,
            pages: 0,
            total: 0,
            selected_index: 0,
            table_state: TableState::default(),
            loading: true,
            icons: IconService::default(),
        }
    }

    /// Replace the visible page. `page` is zero-based.
    pub fn update_data(
        &mut self,
        sessions: Vec<Session>,
        selected_ids: HashSet<Uuid>,
        page: usize,
        pages: usize,
        total: usize,
    ) {
        self.sessions = sessions;
        self.selected_ids = selected_ids;
        self.page = page;
        self.pages = pages;
        self.total = total;
        self.loading = false;
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.sessions.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.sessions.len() {
                self.selected_index = self.sessions.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_session(&self) -> Option<&Session> {
        self.sessions.get(self.selected_index)
    }

    fn session_row(&self, session: &Session) -> Row<'static> {
        let checked = self.selected_ids.contains(&session.id);
        let checkbox_style = if checked {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let name_style = if session.is_closed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        Row::new(vec![
            Cell::from(Span::styled(self.icons.checkbox(checked), checkbox_style)),
            Cell::from(Span::styled(session.name.clone(), name_style)),
            Cell::from(create_status_badge(session.status.as_ref(), &self.icons)),
            Cell::from(format_created(session.created_at)),
            Cell::from(session.records_display()),
        ])
    }

    fn title(&self) -> String {
        if self.pages > 1 {
            format!(
                " {} Sessions ({}) - page {}/{} ",
                self.icons.sessions_title(),
                self.total,
                self.page + 1,
                self.pages
            )
        } else {
            format!(" {} Sessions ({}) ", self.icons.sessions_title(), self.total)
        }
    }
}

impl Component for SessionListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousSession,
            KeyCode::Down | KeyCode::Char('j') => Action::NextSession,
            KeyCode::Right | KeyCode::Char('n') => Action::NextPage,
            KeyCode::Left | KeyCode::Char('p') => Action::PreviousPage,
            KeyCode::Char(' ') => self
                .get_selected_session()
                .map_or(Action::None, |session| Action::ToggleSelected(session.id)),
            KeyCode::Char('d') => self
                .get_selected_session()
                .map_or(Action::None, |session| Action::OpenDeleteSession(session.clone())),
            KeyCode::Enter | KeyCode::Char('l') => self
                .get_selected_session()
                .map_or(Action::None, |session| Action::OpenLineItems(session.clone())),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextSession => {
                if !self.sessions.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.sessions.len();
                    self.update_table_state();
                }
                Action::None
            }
            Action::PreviousSession => {
                if !self.sessions.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.sessions.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_table_state();
                }
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
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title())
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        if self.sessions.is_empty() {
            let text = if self.loading {
                "Loading sessions..."
            } else {
                "No sessions"
            };
            f.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::DarkGray)).block(block),
                rect,
            );
            return;
        }

        let rows: Vec<Row> = self.sessions.iter().map(|session| self.session_row(session)).collect();
        let header = Row::new(vec!["", "Name", "Status", "Created", "Employees"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(20),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}
