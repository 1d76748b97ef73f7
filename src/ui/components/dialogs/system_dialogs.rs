use crate::entities::Session;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph, render_scrollbar, shortcuts};
use super::scroll_behavior::Scroll;
use crate::constants::{DIALOG_TITLE_LOGS, DELETE_IRREVERSIBLE_NOTICE};

const HELP_TEXT: &str = r"
SESSIONDESK - Session administration
====================================

NAVIGATION
----------
j/k, ↑/↓    Move between sessions
n/p, →/←    Next/previous page
Space       Select or deselect the highlighted session
Esc         Cancel action or close dialogs

SESSION ACTIONS
---------------
d           Delete the highlighted session (with confirmation)
l, Enter    Show reconciliation line items

BULK ACTIONS
------------
a           Select every session on the page
A           Select every session in the results
U           Deselect all
D           Delete selected sessions that are not in progress
C           Close selected sessions that are not in progress
X           Export selected sessions to JSON

DELETE DIALOG
-------------
Space, c    Tick the confirmation checkbox
Enter       Delete (only once confirmed)
Esc, n      Cancel

CLOSE DIALOG
------------
Type        Closure reason (blank uses the default)
Tab         Tick the confirmation checkbox
Enter       Close sessions

GENERAL
-------
r           Reload sessions
i           Change icon theme
G           Show logs
?           Toggle this help
q, Ctrl+C   Quit

Sessions that are uploading, extracting, analyzing or processing
cannot be deleted until the service finishes with them.

Press 'Esc' or '?' to close this help panel
";

/// Scrollable message box used for errors and info messages
fn render_message_dialog(f: &mut Frame, area: Rect, title: String, color: Color, message: &str, scroll: &mut Scroll) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflow = lines.len() > visible_height;
    let message_text = if overflow {
        scroll.visible(&lines, visible_height).join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflow {
        render_scrollbar(f, content_area, &mut scroll.state);
    }
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut Scroll) {
    render_message_dialog(f, area, format!(" {} Error ", icons.error()), Color::Red, message, scroll);
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut Scroll) {
    render_message_dialog(f, area, format!(" {} Info ", icons.info()), Color::Blue, message, scroll);
}

/// Full-screen scrollable text panel used by help and logs
fn render_text_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut Scroll) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let text = scroll.visible(&lines, visible_height).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        render_scrollbar(f, content_area, &mut scroll.state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut Scroll) {
    render_text_panel(f, area, "📖 Help - Press 'Esc' or '?' to close", HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut Scroll) {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_text_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}

/// Confirmation listing the sessions a bulk delete will remove
pub fn render_bulk_delete_dialog(f: &mut Frame, area: Rect, icons: &IconService, sessions: &[Session]) {
    const MAX_LISTED: usize = 5;

    let listed = sessions.len().min(MAX_LISTED);
    let extra = usize::from(sessions.len() > MAX_LISTED);
    let height = u16::try_from(listed + extra).unwrap_or(u16::MAX).saturating_add(7);

    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} Delete Sessions ", icons.warning()), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let mut lines = vec![
        Line::from(match sessions.len() {
            1 => "Delete 1 session?".to_string(),
            n => format!("Delete {} sessions?", n),
        }),
        Line::from(""),
    ];
    lines.extend(
        sessions
            .iter()
            .take(MAX_LISTED)
            .map(|session| Line::from(vec![Span::styled("  • ", Style::default().fg(Color::Gray)), Span::raw(session.name.clone())])),
    );
    if sessions.len() > MAX_LISTED {
        lines.push(Line::from(Span::styled(
            format!("  … and {} more", sessions.len() - MAX_LISTED),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(DELETE_IRREVERSIBLE_NOTICE, Style::default().fg(Color::Red))));

    let content_height = inner.height.saturating_sub(1);
    f.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::White)),
        Rect::new(inner.x, inner.y, inner.width, content_height),
    );
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_DELETE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        Rect::new(inner.x, inner.y + content_height, inner.width, 1),
    );
}
