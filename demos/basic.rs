//! Basic file logging example.
//!
//! This example demonstrates the simplest way to write dated log entries
//! with daylog.

use daylog::{Context, LogConfig, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(
        LogConfig::new()
            .with_directory("logs")
            .with_host("localhost"),
    );

    logger.info("This is an info message", Context::new())?;
    logger.warning("This is a warning message", Context::new())?;
    logger.error("This is an error message", Context::new().with("code", 500))?;

    println!("wrote 3 entries to {}", logger.create_log_file()?.display());

    Ok(())
}
