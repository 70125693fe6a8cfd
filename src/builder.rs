//! Builder pattern for assembling a logger configuration.
//!
//! This module provides a convenient builder API for configuring a logger in
//! a single chain of method calls, either building a [`LogConfig`] for a
//! local [`Logger`](crate::Logger) or installing the process-wide default.
//!
//! # Example
//!
//! ```rust,no_run
//! // A local logger
//! let logger = daylog::Logger::new(
//!     daylog::builder()
//!         .with_directory("logs")
//!         .with_host("localhost")
//!         .build(),
//! );
//!
//! // The process-wide default
//! daylog::builder()
//!     .with_directory("/var/log/myapp")
//!     .init()
//!     .expect("failed to install the logger");
//! ```

use std::path::PathBuf;

use crate::config::LogConfig;
use crate::error::Result;
use crate::logger::{self, Logger};

/// A builder for configuring a logger.
///
/// This provides a fluent interface over [`LogConfig`], plus [`init`] for
/// installing the result as the process-wide default.
///
/// [`init`]: LogBuilder::init
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Set the directory dated log files are written to.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_directory(directory);
        self
    }

    /// Set the chrono format string for the date in the file name.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.config = self.config.with_date_format(date_format);
        self
    }

    /// Set the chrono format string for the per-entry timestamp.
    pub fn with_log_format(mut self, log_format: impl Into<String>) -> Self {
        self.config = self.config.with_log_format(log_format);
        self
    }

    /// Set the host name prepended to relativized source paths.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config = self.config.with_host(host);
        self
    }

    /// Set the document root stripped from source paths.
    pub fn with_document_root(mut self, document_root: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_document_root(document_root);
        self
    }

    /// Get the assembled configuration without installing anything.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Install the process-wide default logger with the assembled
    /// configuration.
    ///
    /// This consumes the builder. Returns `Error::Init` if a global logger is
    /// already installed.
    pub fn init(self) -> Result<&'static Logger> {
        logger::init(self.config)
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
