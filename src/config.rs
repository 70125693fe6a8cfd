use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for a logger instance.
///
/// Everything here is fixed at construction except the two format strings,
/// which can later be adjusted through [`Options`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory the dated log files are written to.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// chrono format string for the date embedded in the log file name.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// chrono format string for the per-entry timestamp.
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Host name prepended to relativized source paths. When unset it is
    /// resolved from `SERVER_NAME`, then the OS host name, then "".
    #[serde(default)]
    pub host: Option<String>,
    /// Document root stripped from absolute source paths. When unset it is
    /// resolved from `DOCUMENT_ROOT`, then "".
    #[serde(default)]
    pub document_root: Option<PathBuf>,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            directory: default_directory(),
            date_format: default_date_format(),
            log_format: default_log_format(),
            host: None,
            document_root: None,
        }
    }

    /// Set the log directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Set the file-name date format
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Set the entry timestamp format
    pub fn with_log_format(mut self, log_format: impl Into<String>) -> Self {
        self.log_format = log_format.into();
        self
    }

    /// Set the host name used when relativizing source paths
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the document root stripped from source paths
    pub fn with_document_root(mut self, document_root: impl Into<PathBuf>) -> Self {
        self.document_root = Some(document_root.into());
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("logs")
}

fn default_date_format() -> String {
    // day-Month-Year, e.g. "25-Aug-2026"
    "%d-%b-%Y".to_string()
}

fn default_log_format() -> String {
    // Hour:Minute:Second day-Month-Year, e.g. "14:03:07 25-Aug-2026"
    "%H:%M:%S %d-%b-%Y".to_string()
}

/// A partial options mapping accepted by [`Logger::set_options`].
///
/// Only `date_format` and `log_format` are meaningful; any other keys are
/// accepted and retained but unused. Unset fields leave the current values
/// untouched.
///
/// [`Logger::set_options`]: crate::Logger::set_options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// New file-name date format, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    /// New entry timestamp format, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
    /// Unrecognized keys, carried along untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Options {
    /// Create an empty options mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file-name date format
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    /// Set the entry timestamp format
    pub fn with_log_format(mut self, log_format: impl Into<String>) -> Self {
        self.log_format = Some(log_format.into());
        self
    }

    /// Attach an unrecognized key (kept, never interpreted)
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The merged options a logger currently operates with.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptionsState {
    pub date_format: String,
    pub log_format: String,
    pub extra: BTreeMap<String, Value>,
}

impl OptionsState {
    pub fn from_config(config: &LogConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
            log_format: config.log_format.clone(),
            extra: BTreeMap::new(),
        }
    }

    /// Shallow merge: set fields overwrite, unset fields keep the current
    /// value, extra keys accumulate. Nothing is ever removed.
    pub fn merge(&mut self, options: Options) {
        if let Some(date_format) = options.date_format {
            self.date_format = date_format;
        }
        if let Some(log_format) = options.log_format {
            self.log_format = log_format;
        }
        self.extra.extend(options.extra);
    }

    /// The full current mapping, including retained unrecognized keys.
    pub fn snapshot(&self) -> Options {
        Options {
            date_format: Some(self.date_format.clone()),
            log_format: Some(self.log_format.clone()),
            extra: self.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_new() {
        let config = LogConfig::new();
        assert_eq!(config.directory, PathBuf::from("logs"));
        assert_eq!(config.date_format, "%d-%b-%Y");
        assert_eq!(config.log_format, "%H:%M:%S %d-%b-%Y");
        assert!(config.host.is_none());
        assert!(config.document_root.is_none());
    }

    #[test]
    fn test_log_config_default() {
        assert_eq!(LogConfig::default(), LogConfig::new());
    }

    #[test]
    fn test_log_config_with_directory() {
        let config = LogConfig::new().with_directory("/var/log/app");
        assert_eq!(config.directory, PathBuf::from("/var/log/app"));
    }

    #[test]
    fn test_log_config_with_formats() {
        let config = LogConfig::new()
            .with_date_format("%Y-%m-%d")
            .with_log_format("%H:%M");
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.log_format, "%H:%M");
    }

    #[test]
    fn test_log_config_with_host_and_document_root() {
        let config = LogConfig::new()
            .with_host("localhost")
            .with_document_root("/var/www/html");
        assert_eq!(config.host.as_deref(), Some("localhost"));
        assert_eq!(config.document_root, Some(PathBuf::from("/var/www/html")));
    }

    #[test]
    fn test_log_config_deserializes_with_defaults() {
        let config: LogConfig = serde_yaml::from_str("host: web1").unwrap();
        assert_eq!(config.host.as_deref(), Some("web1"));
        assert_eq!(config.directory, PathBuf::from("logs"));
        assert_eq!(config.date_format, "%d-%b-%Y");
    }

    #[test]
    fn test_options_accepts_unknown_keys() {
        let options: Options =
            serde_yaml::from_str("date_format: \"%Y\"\ncolour: blue\n").unwrap();
        assert_eq!(options.date_format.as_deref(), Some("%Y"));
        assert_eq!(options.extra.get("colour"), Some(&Value::from("blue")));
    }

    #[test]
    fn test_options_extras_flatten_in_json() {
        let options = Options::new()
            .with_date_format("%Y")
            .with_extra("colour", "blue");
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"date_format":"%Y","colour":"blue"}"#);
        let parsed: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_options_state_merge_keeps_unset_fields() {
        let mut state = OptionsState::from_config(&LogConfig::new());
        state.merge(Options::new().with_date_format("%Y"));
        assert_eq!(state.date_format, "%Y");
        assert_eq!(state.log_format, "%H:%M:%S %d-%b-%Y");
    }

    #[test]
    fn test_options_state_merge_never_removes_keys() {
        let mut state = OptionsState::from_config(&LogConfig::new());
        state.merge(Options::new().with_extra("colour", "blue"));
        state.merge(Options::new().with_extra("size", 7).with_log_format("%H"));
        assert_eq!(state.extra.get("colour"), Some(&Value::from("blue")));
        assert_eq!(state.extra.get("size"), Some(&Value::from(7)));
        assert_eq!(state.log_format, "%H");
    }

    #[test]
    fn test_options_snapshot_round_trip() {
        let mut state = OptionsState::from_config(&LogConfig::new());
        state.merge(Options::new().with_extra("colour", "blue"));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.date_format.as_deref(), Some("%d-%b-%Y"));
        assert_eq!(snapshot.extra.get("colour"), Some(&Value::from("blue")));
    }

    #[test]
    fn test_default_functions() {
        assert_eq!(super::default_directory(), PathBuf::from("logs"));
        assert_eq!(super::default_date_format(), "%d-%b-%Y");
        assert_eq!(super::default_log_format(), "%H:%M:%S %d-%b-%Y");
    }
}
