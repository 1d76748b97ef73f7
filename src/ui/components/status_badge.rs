//! Session status badges

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::entities::SessionStatus;
use crate::icons::IconService;

/// Display attributes for a session status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: Color,
    pub icon: &'static str,
}

impl StatusBadge {
    /// Look up the badge for a status. Unknown and missing statuses get a neutral badge.
    #[must_use]
    pub fn for_status(status: Option<&SessionStatus>, icons: &IconService) -> Self {
        let glyphs = icons.icons().status;
        let Some(status) = status else {
            return Self::unknown(glyphs.unknown);
        };

        match status {
            SessionStatus::Uploading => Self {
                label: "Uploading",
                color: Color::Cyan,
                icon: glyphs.uploading,
            },
            SessionStatus::Extracting => Self {
                label: "Extracting",
                color: Color::Blue,
                icon: glyphs.extracting,
            },
            SessionStatus::Analyzing => Self {
                label: "Analyzing",
                color: Color::Magenta,
                icon: glyphs.analyzing,
            },
            SessionStatus::Processing => Self {
                label: "Processing",
                color: Color::Yellow,
                icon: glyphs.processing,
            },
            SessionStatus::Completed => Self {
                label: "Completed",
                color: Color::Green,
                icon: glyphs.completed,
            },
            SessionStatus::Failed => Self {
                label: "Failed",
                color: Color::Red,
                icon: glyphs.failed,
            },
            SessionStatus::Closed => Self {
                label: "Closed",
                color: Color::DarkGray,
                icon: glyphs.closed,
            },
            SessionStatus::Unknown(_) => Self::unknown(glyphs.unknown),
        }
    }

    fn unknown(icon: &'static str) -> Self {
        Self {
            label: "Unknown",
            color: Color::Gray,
            icon,
        }
    }

    /// Render as a single styled span, e.g. `+ Completed`
    #[must_use]
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(
            format!("{} {}", self.icon, self.label),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )
    }
}

/// Create a status badge span for a session status
#[must_use]
pub fn create_status_badge(status: Option<&SessionStatus>, icons: &IconService) -> Span<'static> {
    StatusBadge::for_status(status, icons).to_span()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconTheme;

    #[test]
    fn test_known_statuses() {
        let icons = IconService::new(IconTheme::Ascii);

        let badge = StatusBadge::for_status(Some(&SessionStatus::Completed), &icons);
        assert_eq!(badge.label, "Completed");
        assert_eq!(badge.color, Color::Green);
        assert_eq!(badge.icon, "+");

        let badge = StatusBadge::for_status(Some(&SessionStatus::Failed), &icons);
        assert_eq!(badge.label, "Failed");
        assert_eq!(badge.color, Color::Red);
    }

    #[test]
    fn test_unknown_and_missing_fall_back() {
        let icons = IconService::new(IconTheme::Ascii);
        let unknown = StatusBadge::for_status(Some(&SessionStatus::parse("queued")), &icons);
        let missing = StatusBadge::for_status(None, &icons);

        assert_eq!(unknown.label, "Unknown");
        assert_eq!(unknown.color, Color::Gray);
        assert_eq!(unknown, missing);
    }

    #[test]
    fn test_lowercase_code_maps_to_same_badge() {
        let icons = IconService::new(IconTheme::Unicode);
        let upper = StatusBadge::for_status(Some(&SessionStatus::parse("PROCESSING")), &icons);
        let lower = StatusBadge::for_status(Some(&SessionStatus::parse("processing")), &icons);
        assert_eq!(upper, lower);
        assert_eq!(upper.icon, "⟳");
    }

    #[test]
    fn test_span_content() {
        let span = create_status_badge(Some(&SessionStatus::Closed), &IconService::new(IconTheme::Ascii));
        assert_eq!(span.content, "# Closed");
    }
}
