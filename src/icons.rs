//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Session status glyphs
#[derive(Debug, Clone)]
pub struct SessionStatusIcons {
    pub uploading: &'static str,
    pub extracting: &'static str,
    pub analyzing: &'static str,
    pub processing: &'static str,
    pub completed: &'static str,
    pub failed: &'static str,
    pub closed: &'static str,
    pub unknown: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub sessions_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub locked: &'static str,
}

/// Checkbox and selection markers
#[derive(Debug, Clone)]
pub struct SelectionIcons {
    pub checked: &'static str,
    pub unchecked: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub status: SessionStatusIcons,
    pub ui: UiIcons,
    pub selection: SelectionIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            status: SessionStatusIcons {
                uploading: "⬆️",
                extracting: "📦",
                analyzing: "🔍",
                processing: "⚙️",
                completed: "✅",
                failed: "❌",
                closed: "🔒",
                unknown: "❔",
            },
            ui: UiIcons {
                sessions_title: "🗂️",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                locked: "⛔",
            },
            selection: SelectionIcons {
                checked: "☑️",
                unchecked: "⬜",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            status: SessionStatusIcons {
                uploading: "↑",
                extracting: "⇲",
                analyzing: "◎",
                processing: "⟳",
                completed: "✓",
                failed: "✗",
                closed: "■",
                unknown: "?",
            },
            ui: UiIcons {
                sessions_title: "▤",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                locked: "⊘",
            },
            selection: SelectionIcons {
                checked: "☑",
                unchecked: "☐",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            status: SessionStatusIcons {
                uploading: "^",
                extracting: ">",
                analyzing: "~",
                processing: "*",
                completed: "+",
                failed: "X",
                closed: "#",
                unknown: "?",
            },
            ui: UiIcons {
                sessions_title: ">",
                error: "X",
                info: "i",
                warning: "!",
                locked: "-",
            },
            selection: SelectionIcons {
                checked: "[x]",
                unchecked: "[ ]",
            },
        }
    }

    #[must_use]
    pub fn sessions_title(&self) -> &'static str {
        self.icons().ui.sessions_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn locked(&self) -> &'static str {
        self.icons().ui.locked
    }

    /// Checkbox marker for a boolean state
    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let selection = self.icons().selection;
        if checked {
            selection.checked
        } else {
            selection.unchecked
        }
    }
}
