//! Date and time utility functions
//!
//! Human-readable rendering of session creation dates ("today", "3 days ago").

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

/// Default date format for session creation dates
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Describe `date` relative to `today`
///
/// Recent dates read as "today", "yesterday" or "N days ago"; anything older
/// than a month falls back to "Jan 15", or "Jan 15, 2024" outside the current year.
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (today - date).num_days();

    match days_diff {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        -1 => "tomorrow".to_string(),
        diff if (2..=30).contains(&diff) => format!("{} days ago", diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Human-readable creation date, or "Unknown" when the service did not report one
pub fn format_created(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(created_at) => {
            let local = created_at.with_timezone(&Local);
            format_human_date(local.date_naive(), Local::now().date_naive())
        }
        None => "Unknown".to_string(),
    }
}
