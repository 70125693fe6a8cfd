use std::panic::Location;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::Local;
use once_cell::sync::OnceCell;

use crate::config::{LogConfig, Options, OptionsState};
use crate::context::Context;
use crate::entry::{Entry, Severity, format_timestamp};
use crate::error::{Error, Result};
use crate::path::{abs_to_rel_path, resolve_document_root, resolve_host};
use crate::writer::DatedWriter;

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// A file logger that appends one formatted line per call to a dated file.
///
/// Each level method records the caller's own source file and line, converts
/// the file to `host/relative-path` form, and appends
/// `[time] [path] [line]: [SEVERITY] - message context` to
/// `<directory>/log-<date>.txt`. The file is validated, opened, and closed on
/// every call, so the logger keeps working when the file or directory is
/// removed between writes.
#[derive(Debug)]
pub struct Logger {
    writer: DatedWriter,
    host: String,
    document_root: String,
    options: Mutex<OptionsState>,
}

impl Logger {
    /// Create a logger from a config.
    ///
    /// Host and document root are resolved once, here: the config value when
    /// set, otherwise `SERVER_NAME`/`DOCUMENT_ROOT` from the environment,
    /// otherwise (for the host) the OS host name, otherwise "".
    pub fn new(config: LogConfig) -> Self {
        let host = resolve_host(&config);
        let document_root = resolve_document_root(&config);
        let options = Mutex::new(OptionsState::from_config(&config));
        Self {
            writer: DatedWriter::new(config.directory),
            host,
            document_root,
            options,
        }
    }

    /// Merge new options into the current ones.
    ///
    /// Unset fields keep their current values; unrecognized keys are retained
    /// but unused. Nothing is ever removed.
    pub fn set_options(&self, options: Options) {
        self.lock_options().merge(options);
    }

    /// The full current options mapping, including retained unrecognized keys.
    pub fn current_options(&self) -> Options {
        self.lock_options().snapshot()
    }

    /// Write an INFO entry recording the caller's file and line
    #[track_caller]
    pub fn info(&self, message: &str, context: Context) -> Result<()> {
        self.log(Severity::Info, message, context)
    }

    /// Write a NOTICE entry
    #[track_caller]
    pub fn notice(&self, message: &str, context: Context) -> Result<()> {
        self.log(Severity::Notice, message, context)
    }

    /// Write a DEBUG entry
    #[track_caller]
    pub fn debug(&self, message: &str, context: Context) -> Result<()> {
        self.log(Severity::Debug, message, context)
    }

    /// Write a WARNING entry
    #[track_caller]
    pub fn warning(&self, message: &str, context: Context) -> Result<()> {
        self.log(Severity::Warning, message, context)
    }

    /// Write an ERROR entry
    #[track_caller]
    pub fn error(&self, message: &str, context: Context) -> Result<()> {
        self.log(Severity::Error, message, context)
    }

    /// Write a FATAL entry. The severity is a label only; nothing aborts.
    #[track_caller]
    pub fn fatal(&self, message: &str, context: Context) -> Result<()> {
        self.log(Severity::Fatal, message, context)
    }

    /// Write an entry at an arbitrary severity, recording the caller's file
    /// and line.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str, context: Context) -> Result<()> {
        let location = Location::caller();
        self.log_at(
            severity,
            Some(message),
            context,
            Some(location.file()),
            Some(location.line()),
        )
    }

    /// Write an entry with an explicit call site.
    ///
    /// `None` fields render as `N/A`. This is the full write path; the level
    /// methods are thin wrappers over it.
    pub fn log_at(
        &self,
        severity: Severity,
        message: Option<&str>,
        context: Context,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Result<()> {
        let (date_format, log_format) = {
            let guard = self.lock_options();
            (guard.date_format.clone(), guard.log_format.clone())
        };
        let date = format_timestamp(Local::now(), &date_format);
        let timestamp = format_timestamp(Local::now(), &log_format);
        let rel_path = file.map(|file| self.abs_to_rel_path(file));
        let entry = Entry {
            timestamp,
            path: rel_path.as_deref(),
            line,
            severity,
            message,
            context: context.render(),
        };
        self.writer.append(&date, &entry.render())
    }

    /// Create today's log file (and the directory) without writing an entry.
    /// Returns the file path.
    pub fn create_log_file(&self) -> Result<PathBuf> {
        let date_format = self.lock_options().date_format.clone();
        let date = format_timestamp(Local::now(), &date_format);
        self.writer.ensure(&date)
    }

    /// Close the log file handle if one is open; no-op otherwise.
    pub fn close_file(&self) {
        self.writer.close();
    }

    /// Convert an absolute source path to `host/relative-path` form using
    /// this logger's host and document root. Idempotent.
    pub fn abs_to_rel_path(&self, path: &str) -> String {
        abs_to_rel_path(path, &self.host, &self.document_root)
    }

    /// The directory dated log files are written to.
    pub fn directory(&self) -> &std::path::Path {
        self.writer.directory()
    }

    fn lock_options(&self) -> std::sync::MutexGuard<'_, OptionsState> {
        self.options.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

/// Install the process-wide default logger.
///
/// Returns `Error::Init` if a global logger is already installed.
pub fn init(config: LogConfig) -> Result<&'static Logger> {
    GLOBAL_LOGGER
        .try_insert(Logger::new(config))
        .map_err(|_| Error::Init("global logger already installed".to_string()))
}

/// The process-wide default logger, if [`init`] has run.
pub fn global() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}
