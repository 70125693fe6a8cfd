//! # Daylog
//!
//! A minimal file logger: one log file per calendar day, one formatted line
//! per call, annotated with the caller's source file and line.
//!
//! ## Features
//!
//! - Six always-on severities (INFO, NOTICE, DEBUG, WARNING, ERROR, FATAL)
//! - Call-site capture via `#[track_caller]`
//! - Source paths relativized to `host/relative-path` form
//! - Runtime-adjustable date and timestamp formats
//! - Optional `log` facade adapter (feature `facade`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use daylog::{Context, LogConfig, Logger};
//!
//! let logger = Logger::new(LogConfig::new().with_directory("logs"));
//! logger.info("User created", Context::new().with("userId", 123))?;
//! # Ok::<(), daylog::Error>(())
//! ```
//!
//! Each call appends a line such as
//! `[14:03:07 25-Aug-2026] [localhost/app/index.php] [42]: [INFO] - User created {"userId":123}`
//! to `logs/log-25-Aug-2026.txt`.
//!
//! ## Limitations
//!
//! The logger is synchronous and blocking: every call validates, opens,
//! writes, and closes the file, with no buffering. That keeps it robust
//! against files deleted between writes, at the cost of one open and close
//! per entry. There is no cross-process file locking (two processes sharing a
//! directory rely on the atomicity of single appends), no rotation beyond the
//! date in the file name, and no level filtering.

pub mod builder;
pub mod config;
pub mod context;
mod entry;
pub mod error;
pub mod logger;
mod path;
pub mod strict;
mod writer;

#[cfg(feature = "facade")]
pub mod facade;

pub use builder::LogBuilder;
pub use config::{LogConfig, Options};
pub use context::Context;
pub use entry::Severity;
pub use error::{Error, Result};
pub use logger::{Logger, global, init};
pub use strict::StrictLogger;

#[cfg(feature = "facade")]
pub use facade::install_facade;

/// Create a [`LogBuilder`] with default configuration.
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}
