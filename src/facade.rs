use log::{Level, Metadata, Record};

use crate::context::Context;
use crate::entry::Severity;
use crate::error::{Error, Result};
use crate::logger::Logger;

fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug => Severity::Debug,
        Level::Trace => Severity::Debug,
    }
}

impl log::Log for Logger {
    /// Always true: no level filters or suppresses output.
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    /// Write the record through the normal path with an empty context.
    ///
    /// The call site comes from the record's file and line. `log::Log` cannot
    /// surface errors, so a failed write prints a diagnostic to stderr
    /// instead of returning `Err`.
    fn log(&self, record: &Record) {
        let message = record.args().to_string();
        let outcome = self.log_at(
            severity_for(record.level()),
            Some(&message),
            Context::new(),
            record.file(),
            record.line(),
        );
        if let Err(err) = outcome {
            eprintln!("daylog: {err}");
        }
    }

    fn flush(&self) {
        self.close_file();
    }
}

/// Route the `log` macros (`log::info!` and friends) through `logger`.
///
/// Registers the logger with `log::set_boxed_logger` and raises the max level
/// to `Trace` so nothing is filtered. Fails with `Error::Init` when a `log`
/// backend is already registered.
pub fn install_facade(logger: Logger) -> Result<()> {
    log::set_boxed_logger(Box::new(logger)).map_err(|e| Error::Init(e.to_string()))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
