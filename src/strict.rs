use std::process;

use crate::config::{LogConfig, Options};
use crate::context::Context;
use crate::entry::Severity;
use crate::error::Result;
use crate::logger::Logger;

/// A wrapper that aborts the process instead of returning errors.
///
/// The level methods write exactly like [`Logger`]'s, but a failed write
/// prints the error to stderr and exits with status 1. For callers that treat
/// a dead log file as unrecoverable.
#[derive(Debug)]
pub struct StrictLogger {
    inner: Logger,
}

impl StrictLogger {
    pub fn new(logger: Logger) -> Self {
        Self { inner: logger }
    }

    pub fn from_config(config: LogConfig) -> Self {
        Self::new(Logger::new(config))
    }

    #[track_caller]
    pub fn info(&self, message: &str, context: Context) {
        self.check(self.inner.info(message, context));
    }

    #[track_caller]
    pub fn notice(&self, message: &str, context: Context) {
        self.check(self.inner.notice(message, context));
    }

    #[track_caller]
    pub fn debug(&self, message: &str, context: Context) {
        self.check(self.inner.debug(message, context));
    }

    #[track_caller]
    pub fn warning(&self, message: &str, context: Context) {
        self.check(self.inner.warning(message, context));
    }

    #[track_caller]
    pub fn error(&self, message: &str, context: Context) {
        self.check(self.inner.error(message, context));
    }

    #[track_caller]
    pub fn fatal(&self, message: &str, context: Context) {
        self.check(self.inner.fatal(message, context));
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str, context: Context) {
        self.check(self.inner.log(severity, message, context));
    }

    pub fn set_options(&self, options: Options) {
        self.inner.set_options(options);
    }

    /// The wrapped logger
    pub fn inner(&self) -> &Logger {
        &self.inner
    }

    pub fn into_inner(self) -> Logger {
        self.inner
    }

    fn check(&self, result: Result<()>) {
        if let Err(err) = result {
            eprintln!("daylog: {err}");
            process::exit(1);
        }
    }
}
