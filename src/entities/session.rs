use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status reported by the session service.
///
/// Codes are matched case-insensitively. Anything the console does not know
/// about is kept verbatim in [`SessionStatus::Unknown`] so it can still be shown.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    Uploading,
    Extracting,
    Analyzing,
    Processing,
    Completed,
    Failed,
    Closed,
    Unknown(String),
}

impl SessionStatus {
    /// Parse a status code, ignoring case.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "UPLOADING" => Self::Uploading,
            "EXTRACTING" => Self::Extracting,
            "ANALYZING" => Self::Analyzing,
            "PROCESSING" => Self::Processing,
            "COMPLETED" => Self::Completed,
            "FAILED" => Self::Failed,
            "CLOSED" => Self::Closed,
            _ => Self::Unknown(code.to_string()),
        }
    }

    /// Upper-case wire code
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Uploading => "UPLOADING",
            Self::Extracting => "EXTRACTING",
            Self::Analyzing => "ANALYZING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Closed => "CLOSED",
            Self::Unknown(code) => code,
        }
    }
}

impl From<String> for SessionStatus {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read-only snapshot of a session as handed out by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: Option<SessionStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub is_closed: bool,
}

impl Session {
    pub fn new(name: impl Into<String>, status: Option<SessionStatus>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status,
            created_at: None,
            employee_count: None,
            is_closed: false,
        }
    }

    /// Creation date formatted with `date_format`, or "Unknown" when absent.
    #[must_use]
    pub fn created_display(&self, date_format: &str) -> String {
        match self.created_at {
            Some(created_at) => created_at.format(date_format).to_string(),
            None => "Unknown".to_string(),
        }
    }

    #[must_use]
    pub fn records_display(&self) -> String {
        match self.employee_count.unwrap_or(0) {
            1 => "1 record".to_string(),
            count => format!("{count} records"),
        }
    }
}

/// Selection summary the host hands to the bulk toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionStats {
    pub total: usize,
    pub selected: usize,
    pub eligible: usize,
    pub ineligible: usize,
    pub pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_parse_ignores_case() {
        assert_eq!(SessionStatus::parse("processing"), SessionStatus::Processing);
        assert_eq!(SessionStatus::parse("Completed"), SessionStatus::Completed);
        assert_eq!(SessionStatus::parse("UPLOADING"), SessionStatus::Uploading);
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = SessionStatus::parse("queued");
        assert_eq!(status, SessionStatus::Unknown("queued".to_string()));
        assert_eq!(status.code(), "queued");
    }

    #[test]
    fn test_status_serde_uses_code_string() {
        let json = serde_json::to_string(&SessionStatus::Analyzing).unwrap();
        assert_eq!(json, "\"ANALYZING\"");

        let parsed: SessionStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(parsed, SessionStatus::Failed);
    }

    #[test]
    fn test_session_missing_optional_fields() {
        let json = r#"{"id":"6f1c1a8e-0000-4000-8000-000000000001","name":"March payroll"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.status.is_none());
        assert!(session.created_at.is_none());
        assert!(!session.is_closed);
    }

    #[test]
    fn test_placeholders() {
        let mut session = Session::new("Payroll", Some(SessionStatus::Completed));
        assert_eq!(session.created_display("%Y-%m-%d"), "Unknown");
        assert_eq!(session.records_display(), "0 records");

        session.employee_count = Some(1);
        assert_eq!(session.records_display(), "1 record");
        session.employee_count = Some(42);
        assert_eq!(session.records_display(), "42 records");

        session.created_at = Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap());
        assert_eq!(session.created_display("%Y-%m-%d"), "2025-03-14");
    }
}
