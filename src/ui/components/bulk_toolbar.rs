//! Bulk action toolbar shown above the session table.

use crate::entities::SelectionStats;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Which toolbar buttons are currently usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarButtons {
    pub delete: bool,
    pub export: bool,
    pub close: bool,
    pub deselect_all: bool,
    pub select_all_page: bool,
    pub select_all_results: bool,
}

impl ToolbarButtons {
    /// Delete and close need at least one eligible session in the selection.
    #[must_use]
    pub fn compute(selected_count: usize, total_count: usize, stats: &SelectionStats) -> Self {
        let has_selection = selected_count > 0;
        let actionable = has_selection && stats.eligible > 0;
        Self {
            delete: actionable,
            export: has_selection,
            close: actionable,
            deselect_all: has_selection,
            select_all_page: total_count > 0,
            select_all_results: selected_count < total_count,
        }
    }
}

pub struct BulkToolbar {
    stats: SelectionStats,
    buttons: ToolbarButtons,
}

impl Default for BulkToolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkToolbar {
    pub fn new() -> Self {
        Self {
            stats: SelectionStats::default(),
            buttons: ToolbarButtons::default(),
        }
    }

    pub fn update_stats(&mut self, stats: SelectionStats) {
        self.stats = stats;
        self.buttons = ToolbarButtons::compute(stats.selected, stats.total, &stats);
    }

    pub fn buttons(&self) -> ToolbarButtons {
        self.buttons
    }

    fn counts_line(&self) -> Line<'static> {
        let stats = self.stats;
        let mut spans = vec![Span::styled(
            format!("{} of {} selected", stats.selected, stats.total),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if stats.selected > 0 {
            spans.push(Span::styled(
                format!("  ({} eligible, {} in progress or closed)", stats.eligible, stats.ineligible),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans)
    }

    fn buttons_line(&self) -> Line<'static> {
        let buttons = [
            ("D", "Delete", self.buttons.delete, Color::Red),
            ("X", "Export", self.buttons.export, Color::Cyan),
            ("C", "Close", self.buttons.close, Color::Yellow),
            ("U", "Deselect all", self.buttons.deselect_all, Color::White),
            ("a", "Select page", self.buttons.select_all_page, Color::White),
            ("A", "Select all results", self.buttons.select_all_results, Color::White),
        ];

        let mut spans = Vec::new();
        for (i, (key, label, enabled, color)) in buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let (key_style, label_style) = if enabled {
                (
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Gray),
                )
            } else {
                let dimmed = Style::default().fg(Color::DarkGray);
                (dimmed, dimmed)
            };
            spans.push(Span::styled(format!("[{}]", key), key_style));
            spans.push(Span::styled(format!(" {}", label), label_style));
        }
        Line::from(spans)
    }
}

impl Component for BulkToolbar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let buttons = self.buttons;
        match key.code {
            KeyCode::Char('D') if buttons.delete => Action::DeleteSelected,
            KeyCode::Char('X') if buttons.export => Action::ExportSelected,
            KeyCode::Char('C') if buttons.close => Action::CloseSelected,
            KeyCode::Char('U') if buttons.deselect_all => Action::DeselectAll,
            KeyCode::Char('a') if buttons.select_all_page => Action::SelectAllPage,
            KeyCode::Char('A') if buttons.select_all_results => Action::SelectAllResults,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Bulk actions ")
            .style(Style::default().fg(Color::Gray));

        let paragraph = Paragraph::new(vec![self.counts_line(), self.buttons_line()]).block(block);
        f.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn stats(total: usize, selected: usize, eligible: usize, ineligible: usize) -> SelectionStats {
        SelectionStats {
            total,
            selected,
            eligible,
            ineligible,
            pages: 1,
        }
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_no_eligible_disables_delete_and_close() {
        let buttons = ToolbarButtons::compute(3, 10, &stats(10, 3, 0, 3));
        assert!(!buttons.delete);
        assert!(!buttons.close);
        assert!(buttons.export);
        assert!(buttons.deselect_all);
    }

    #[test]
    fn test_empty_selection() {
        let buttons = ToolbarButtons::compute(0, 10, &stats(10, 0, 0, 0));
        assert!(!buttons.delete);
        assert!(!buttons.export);
        assert!(!buttons.close);
        assert!(!buttons.deselect_all);
        assert!(buttons.select_all_page);
        assert!(buttons.select_all_results);
    }

    #[test]
    fn test_everything_selected() {
        let buttons = ToolbarButtons::compute(10, 10, &stats(10, 10, 4, 6));
        assert!(buttons.delete);
        assert!(buttons.close);
        assert!(!buttons.select_all_results);
    }

    #[test]
    fn test_no_sessions() {
        let buttons = ToolbarButtons::compute(0, 0, &SelectionStats::default());
        assert_eq!(buttons, ToolbarButtons::default());
    }

    #[test]
    fn test_disabled_buttons_emit_nothing() {
        let mut toolbar = BulkToolbar::new();
        toolbar.update_stats(stats(5, 2, 0, 2));

        assert!(matches!(toolbar.handle_key_events(key('D')), Action::None));
        assert!(matches!(toolbar.handle_key_events(key('C')), Action::None));
        assert!(matches!(toolbar.handle_key_events(key('X')), Action::ExportSelected));
        assert!(matches!(toolbar.handle_key_events(key('A')), Action::SelectAllResults));
    }

    #[test]
    fn test_enabled_buttons_emit_actions() {
        let mut toolbar = BulkToolbar::new();
        toolbar.update_stats(stats(5, 2, 1, 1));

        assert!(matches!(toolbar.handle_key_events(key('D')), Action::DeleteSelected));
        assert!(matches!(toolbar.handle_key_events(key('C')), Action::CloseSelected));
        assert!(matches!(toolbar.handle_key_events(key('U')), Action::DeselectAll));
        assert!(matches!(toolbar.handle_key_events(key('a')), Action::SelectAllPage));
    }
}
