use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Severity of a log entry.
///
/// Every severity always writes; there is no minimum-level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Notice,
    Debug,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// The uppercase tag used in the formatted line
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A log entry before it becomes a line in the file.
pub(crate) struct Entry<'a> {
    pub timestamp: String,
    pub path: Option<&'a str>,
    pub line: Option<u32>,
    pub severity: Severity,
    pub message: Option<&'a str>,
    pub context: Option<String>,
}

impl Entry<'_> {
    /// Render `[time] [path] [line]: [SEVERITY] - message context`.
    ///
    /// Missing fields render as `N/A` so columns stay aligned; an empty
    /// context contributes nothing, not even the separating space.
    pub fn render(&self) -> String {
        let line = match self.line {
            Some(line) => line.to_string(),
            None => "N/A".to_string(),
        };
        let mut out = format!(
            "[{}] [{}] [{}]: [{}] - {}",
            self.timestamp,
            self.path.unwrap_or("N/A"),
            line,
            self.severity,
            self.message.unwrap_or("N/A"),
        );
        if let Some(context) = &self.context {
            out.push(' ');
            out.push_str(context);
        }
        out
    }
}

/// Render `now` with a chrono format string.
///
/// An invalid specifier falls back to the literal format text instead of
/// failing the write.
pub(crate) fn format_timestamp(now: DateTime<Local>, format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        out
    } else {
        format.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 25, 14, 3, 7).unwrap()
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Info.label(), "INFO");
        assert_eq!(Severity::Notice.label(), "NOTICE");
        assert_eq!(Severity::Debug.label(), "DEBUG");
        assert_eq!(Severity::Warning.label(), "WARNING");
        assert_eq!(Severity::Error.label(), "ERROR");
        assert_eq!(Severity::Fatal.label(), "FATAL");
        assert_eq!(Severity::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_entry_renders_full_line() {
        let entry = Entry {
            timestamp: "14:03:07 25-Aug-2026".to_string(),
            path: Some("localhost/app/index.php"),
            line: Some(42),
            severity: Severity::Info,
            message: Some("User created"),
            context: Some("{\"userId\":123}".to_string()),
        };
        assert_eq!(
            entry.render(),
            "[14:03:07 25-Aug-2026] [localhost/app/index.php] [42]: [INFO] - User created {\"userId\":123}"
        );
    }

    #[test]
    fn test_entry_missing_fields_render_na() {
        let entry = Entry {
            timestamp: "14:03:07 25-Aug-2026".to_string(),
            path: None,
            line: None,
            severity: Severity::Error,
            message: None,
            context: None,
        };
        assert_eq!(
            entry.render(),
            "[14:03:07 25-Aug-2026] [N/A] [N/A]: [ERROR] - N/A"
        );
    }

    #[test]
    fn test_entry_empty_context_no_trailing_space() {
        let entry = Entry {
            timestamp: "t".to_string(),
            path: Some("host/a.rs"),
            line: Some(1),
            severity: Severity::Debug,
            message: Some("msg"),
            context: None,
        };
        let line = entry.render();
        assert!(line.ends_with("msg"));
        assert!(!line.ends_with(' '));
    }

    #[test]
    fn test_format_timestamp_defaults() {
        assert_eq!(format_timestamp(fixed_time(), "%d-%b-%Y"), "25-Aug-2026");
        assert_eq!(
            format_timestamp(fixed_time(), "%H:%M:%S %d-%b-%Y"),
            "14:03:07 25-Aug-2026"
        );
    }

    #[test]
    fn test_format_timestamp_invalid_format_falls_back_to_literal() {
        // a trailing '%' is not a valid specifier
        assert_eq!(format_timestamp(fixed_time(), "time: %"), "time: %");
    }
}
