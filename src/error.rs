use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors that can occur in the logging library
#[derive(ThisError, Debug)]
pub enum Error {
    /// The log directory could not be created.
    #[error("failed to create log directory '{}': {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The log file could not be created.
    #[error("failed to create log file '{}': {source}", .path.display())]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The log file exists but its permission bits allow no writing.
    ///
    /// Detection is based on the file's mode bits, not an access check: a
    /// file unwritable for ownership or ACL reasons fails the subsequent
    /// append open and surfaces as [`Error::FileOpen`] instead.
    #[error("log file '{}' is not writable", .path.display())]
    Permission { path: PathBuf },
    /// Opening the log file in append mode failed.
    #[error("failed to open log file '{}' for append: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Appending a formatted entry to the log file failed.
    #[error("failed to write entry to log file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// One-time initialization was attempted more than once.
    #[error("initialization error: {0}")]
    Init(String),
}

impl Error {
    /// The log file or directory the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::DirectoryCreation { path, .. }
            | Error::FileCreation { path, .. }
            | Error::Permission { path }
            | Error::FileOpen { path, .. }
            | Error::Write { path, .. } => Some(path),
            Error::Init(_) => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
