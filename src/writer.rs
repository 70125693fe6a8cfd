use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{Error, Result};

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Writes entry lines to one file per calendar date.
///
/// The file handle never persists across calls: every append opens the file,
/// writes one complete line, and closes it again. The filesystem state is
/// re-validated on every write, so a log file or directory deleted between
/// calls is recreated instead of failing.
#[derive(Debug)]
pub(crate) struct DatedWriter {
    directory: PathBuf,
    /// Transient append handle; `Some` only while a write is in flight
    /// under the lock, cleared before `append` returns.
    handle: Mutex<Option<File>>,
}

impl DatedWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            handle: Mutex::new(None),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the log file for a rendered date, e.g. `logs/log-25-Aug-2026.txt`.
    pub fn file_path(&self, date: &str) -> PathBuf {
        self.directory.join(format!("log-{date}.txt"))
    }

    /// Make sure the directory and the dated file exist and the file is
    /// writable. Returns the file path.
    pub fn ensure(&self, date: &str) -> Result<PathBuf> {
        let _guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        self.ensure_at(date)
    }

    /// Append one line plus a platform newline in a single write.
    pub fn append(&self, date: &str, line: &str) -> Result<()> {
        let mut guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        let path = self.ensure_at(date)?;
        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|source| Error::FileOpen {
                path: path.clone(),
                source,
            })?;
        let handle = guard.insert(file);
        let mut buf = String::with_capacity(line.len() + EOL.len());
        buf.push_str(line);
        buf.push_str(EOL);
        let outcome = handle.write_all(buf.as_bytes());
        *guard = None;
        outcome.map_err(|source| Error::Write { path, source })
    }

    /// Close the handle if one is open; no-op otherwise.
    pub fn close(&self) {
        let mut guard = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    fn ensure_at(&self, date: &str) -> Result<PathBuf> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory).map_err(|source| Error::DirectoryCreation {
                path: self.directory.clone(),
                source,
            })?;
            // permissive mode, best effort
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let _ = fs::set_permissions(&self.directory, fs::Permissions::from_mode(0o777));
            }
        }

        let path = self.file_path(date);
        if !path.exists() {
            File::create(&path).map_err(|source| Error::FileCreation {
                path: path.clone(),
                source,
            })?;
        }

        // mode-bit check only; ownership or ACL denials fail the append open
        let metadata = fs::metadata(&path).map_err(|_| Error::Permission { path: path.clone() })?;
        if metadata.permissions().readonly() {
            return Err(Error::Permission { path });
        }

        Ok(path)
    }
}
