//! Abort-on-failure logging example.
//!
//! `StrictLogger`'s level methods return nothing: a failed write prints the
//! error to stderr and exits the process with a non-zero status.

use daylog::{Context, LogConfig, StrictLogger};

fn main() {
    let logger = StrictLogger::from_config(
        LogConfig::new()
            .with_directory("logs")
            .with_host("localhost"),
    );

    logger.info("Service starting", Context::new());
    logger.notice("Listening", Context::new().with("port", 8080));
    logger.fatal("Shutting down", Context::new());
}
