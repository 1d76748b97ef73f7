use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field with a block cursor drawn at `cursor_position` (in chars)
pub fn create_input_paragraph(input_buffer: &str, cursor_position: usize, field_title: &str) -> Paragraph<'static> {
    let (before, after): (String, String) = {
        let split = input_buffer
            .char_indices()
            .nth(cursor_position)
            .map_or(input_buffer.len(), |(byte_pos, _)| byte_pos);
        (input_buffer[..split].to_string(), input_buffer[split..].to_string())
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(Line::from(vec![
        Span::raw(before),
        Span::styled("█", Style::default().fg(Color::White)),
        Span::raw(after),
    ]))
    .block(input_block)
    .style(Style::default().fg(Color::White))
}

/// A `label: value` line with the label dimmed
pub fn field_line(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", format!("{}:", label)), Style::default().fg(Color::Gray)),
        value,
    ])
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Vertical scrollbar drawn on the right edge of `area`
pub fn render_scrollbar(f: &mut Frame, area: Rect, state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, state);
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Gray, " Close");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Confirm");
    pub const ENTER_DELETE: InstructionShortcut = ("Enter", Color::Red, " Delete");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Space", Color::Cyan, " Toggle confirmation");
    pub const TAB_TOGGLE: InstructionShortcut = ("Tab", Color::Cyan, " Toggle confirmation");
}
