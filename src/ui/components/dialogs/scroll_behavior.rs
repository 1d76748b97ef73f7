use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE_STEP: usize = 10;

/// Scroll position shared by the text dialogs (help, logs, errors)
#[derive(Debug, Default)]
pub struct Scroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl Scroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.state = ScrollbarState::new(0);
    }

    /// Apply a scrolling key. Returns `false` when the key is not a scroll key.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.offset = match code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE_STEP),
            KeyCode::PageDown => self.offset.saturating_add(PAGE_STEP),
            KeyCode::Home => 0,
            // Clamped against the content length at render time
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        self.state = self.state.position(self.offset);
        true
    }

    /// Clamp the offset to the content and return the visible slice
    pub fn visible<'a>(&mut self, lines: &[&'a str], visible_height: usize) -> Vec<&'a str> {
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.state = self
            .state
            .content_length(lines.len())
            .viewport_content_length(visible_height)
            .position(self.offset);

        lines.iter().skip(self.offset).take(visible_height).copied().collect()
    }
}
