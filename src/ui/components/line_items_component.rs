use crate::config::DisplayConfig;
use crate::entities::{ExceptionLineItems, LineItem, MatchConfidence, Session};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::money::{format_amount, format_variance};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineItemsTab {
    #[default]
    All,
    Matched,
    Unmatched,
}

impl LineItemsTab {
    const ORDER: [LineItemsTab; 3] = [LineItemsTab::All, LineItemsTab::Matched, LineItemsTab::Unmatched];

    fn index(self) -> usize {
        match self {
            LineItemsTab::All => 0,
            LineItemsTab::Matched => 1,
            LineItemsTab::Unmatched => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Reconciliation line items for one session, split into three tabs
pub struct LineItemsComponent {
    session: Option<Session>,
    items: ExceptionLineItems,
    tab: LineItemsTab,
    pub display_config: DisplayConfig,
}

impl Default for LineItemsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemsComponent {
    pub fn new() -> Self {
        Self {
            session: None,
            items: ExceptionLineItems::default(),
            tab: LineItemsTab::All,
            display_config: DisplayConfig::default(),
        }
    }

    pub fn open(&mut self, session: Session, items: ExceptionLineItems) {
        self.session = Some(session);
        self.items = items;
        self.tab = LineItemsTab::All;
    }

    pub fn close(&mut self) {
        self.session = None;
        self.items = ExceptionLineItems::default();
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    pub fn tab(&self) -> LineItemsTab {
        self.tab
    }

    fn tab_titles(&self) -> Vec<String> {
        vec![
            format!("All ({})", self.items.all.len()),
            format!("Matched ({})", self.items.matched.len()),
            format!("Unmatched ({})", self.items.unmatched.len()),
        ]
    }

    fn amount(&self, item: Option<&LineItem>) -> String {
        item.map_or_else(|| "-".to_string(), |item| format_amount(item.amount, &self.display_config.currency_symbol))
    }

    fn description(item: Option<&LineItem>) -> String {
        item.map_or_else(|| "-".to_string(), |item| item.description.clone())
    }

    fn all_rows(&self) -> Vec<Row<'static>> {
        let symbol = &self.display_config.currency_symbol;
        self.items
            .all
            .iter()
            .map(|pair| {
                let description = pair
                    .expected
                    .as_ref()
                    .or(pair.actual.as_ref())
                    .map_or_else(|| "-".to_string(), |item| item.description.clone());
                Row::new(vec![
                    Cell::from(description),
                    Cell::from(self.amount(pair.expected.as_ref())),
                    Cell::from(self.amount(pair.actual.as_ref())),
                    variance_cell(pair.variance(), symbol),
                ])
            })
            .collect()
    }

    fn matched_rows(&self) -> Vec<Row<'static>> {
        let symbol = &self.display_config.currency_symbol;
        self.items
            .matched
            .iter()
            .map(|pair| {
                Row::new(vec![
                    Cell::from(pair.expected.description.clone()),
                    Cell::from(format_amount(pair.expected.amount, symbol)),
                    Cell::from(format_amount(pair.actual.amount, symbol)),
                    variance_cell(pair.variance(), symbol),
                    confidence_cell(pair.confidence),
                ])
            })
            .collect()
    }

    fn unmatched_rows(&self) -> Vec<Row<'static>> {
        let unmatched = &self.items.unmatched;
        let count = unmatched.expected.len().max(unmatched.actual.len());
        (0..count)
            .map(|i| {
                let expected = unmatched.expected.get(i);
                let actual = unmatched.actual.get(i);
                Row::new(vec![
                    Cell::from(Self::description(expected)),
                    Cell::from(self.amount(expected)),
                    Cell::from(Self::description(actual)),
                    Cell::from(self.amount(actual)),
                ])
            })
            .collect()
    }

    fn render_table(&self, f: &mut Frame, area: Rect) {
        let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let (header, rows, widths, empty_text): (Vec<&str>, _, Vec<Constraint>, &str) = match self.tab {
            LineItemsTab::All => (
                vec!["Description", "Expected", "Actual", "Variance"],
                self.all_rows(),
                vec![
                    Constraint::Min(20),
                    Constraint::Length(14),
                    Constraint::Length(14),
                    Constraint::Length(14),
                ],
                "No line items for this session",
            ),
            LineItemsTab::Matched => (
                vec!["Description", "Expected", "Actual", "Variance", "Confidence"],
                self.matched_rows(),
                vec![
                    Constraint::Min(20),
                    Constraint::Length(14),
                    Constraint::Length(14),
                    Constraint::Length(14),
                    Constraint::Length(10),
                ],
                "No matched line items",
            ),
            LineItemsTab::Unmatched => (
                vec!["Expected item", "Amount", "Actual item", "Amount"],
                self.unmatched_rows(),
                vec![
                    Constraint::Percentage(35),
                    Constraint::Percentage(15),
                    Constraint::Percentage(35),
                    Constraint::Percentage(15),
                ],
                "Nothing left unmatched",
            ),
        };

        if rows.is_empty() {
            f.render_widget(
                Paragraph::new(empty_text).style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        let table = Table::new(rows, widths)
            .header(Row::new(header).style(header_style))
            .column_spacing(2);
        f.render_widget(table, area);
    }
}

fn variance_cell(variance: f64, symbol: &str) -> Cell<'static> {
    let color = if (variance * 100.0).round() == 0.0 {
        Color::Gray
    } else {
        Color::Red
    };
    Cell::from(Span::styled(format_variance(variance, symbol), Style::default().fg(color)))
}

fn confidence_cell(confidence: MatchConfidence) -> Cell<'static> {
    let color = match confidence {
        MatchConfidence::High => Color::Green,
        MatchConfidence::Medium => Color::Yellow,
        MatchConfidence::Low => Color::Red,
    };
    Cell::from(Span::styled(confidence.label(), Style::default().fg(color)))
}

impl Component for LineItemsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.tab = self.tab.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.tab = self.tab.previous();
                Action::None
            }
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseLineItems,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LineItemsLoaded { session, items } => {
                self.open(session, items);
                Action::None
            }
            Action::CloseLineItems => {
                self.close();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(session) = &self.session else {
            return;
        };

        let area = LayoutManager::centered_rect(90, 80, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Line items - {} ", session.name))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let tabs = Tabs::new(self.tab_titles())
            .select(self.tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider("│");
        f.render_widget(tabs, chunks[0]);

        self.render_table(f, chunks[1]);

        let instructions = Line::from(vec![
            Span::styled("Tab/←/→", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Switch tab", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
            Span::styled(" Close", Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(instructions), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{LineItemPair, MatchedPair};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn item(description: &str, amount: f64) -> LineItem {
        LineItem {
            description: description.to_string(),
            amount,
            reference: None,
        }
    }

    fn sample() -> ExceptionLineItems {
        let mut items = ExceptionLineItems::default();
        items.all.push(LineItemPair {
            expected: Some(item("Base salary", 4200.0)),
            actual: Some(item("Base salary", 4150.0)),
        });
        items.matched.push(MatchedPair {
            expected: item("Base salary", 4200.0),
            actual: item("Base salary", 4150.0),
            confidence: MatchConfidence::Medium,
        });
        items.unmatched.actual.push(item("Overtime", 310.25));
        items
    }

    fn screen(component: &mut LineItemsComponent) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| component.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tabs_cycle() {
        let mut component = LineItemsComponent::new();
        component.open(Session::new("May", None), sample());

        component.handle_key_events(key(KeyCode::Tab));
        assert_eq!(component.tab(), LineItemsTab::Matched);
        component.handle_key_events(key(KeyCode::Right));
        assert_eq!(component.tab(), LineItemsTab::Unmatched);
        component.handle_key_events(key(KeyCode::Right));
        assert_eq!(component.tab(), LineItemsTab::All);
        component.handle_key_events(key(KeyCode::Left));
        assert_eq!(component.tab(), LineItemsTab::Unmatched);
    }

    #[test]
    fn test_escape_requests_close() {
        let mut component = LineItemsComponent::new();
        component.open(Session::new("May", None), sample());
        let action = component.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::CloseLineItems));

        component.update(action);
        assert!(!component.is_visible());
    }

    #[test]
    fn test_open_resets_tab() {
        let mut component = LineItemsComponent::new();
        component.open(Session::new("May", None), sample());
        component.handle_key_events(key(KeyCode::Tab));
        component.open(Session::new("June", None), sample());
        assert_eq!(component.tab(), LineItemsTab::All);
    }

    #[test]
    fn test_render_shows_counts_and_variance() {
        let mut component = LineItemsComponent::new();
        component.open(Session::new("May", None), sample());
        let text = screen(&mut component);

        assert!(text.contains("All (1)"));
        assert!(text.contains("Unmatched (1)"));
        assert!(text.contains("-$50.00"));
    }

    #[test]
    fn test_render_empty_placeholder() {
        let mut component = LineItemsComponent::new();
        component.open(Session::new("May", None), ExceptionLineItems::default());
        component.handle_key_events(key(KeyCode::Tab));
        let text = screen(&mut component);

        assert!(text.contains("No matched line items"));
    }
}
