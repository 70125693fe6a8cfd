//! Example of loading logger configuration from a TOML file.
//!
//! This example demonstrates how to load the logger configuration from
//! a TOML file, write entries, and adjust the formats at runtime.
//!
//! Run with:
//! ```bash
//! cargo run --example config_toml
//! ```

use serde::Deserialize;
use std::fs;

use daylog::{Context, Logger, Options};

#[derive(Deserialize)]
struct Config {
    log: daylog::LogConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read the TOML configuration file
    let config_path = "demos/config.toml";
    let config_content = fs::read_to_string(config_path)
        .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));

    // Parse the TOML configuration
    let root: Config = toml::from_str(&config_content)?;
    let logger = Logger::new(root.log);

    // Log some messages
    logger.info("This is an info message", Context::new())?;
    logger.warning("This is a warning message", Context::new())?;

    // Switch the timestamp detail at runtime
    logger.set_options(Options::new().with_log_format("%H:%M:%S%.3f %d-%b-%Y"));
    logger.info("Timestamps now carry milliseconds", Context::new())?;

    // Log with structured data
    logger.error(
        "Database error occurred",
        Context::new()
            .with("error_code", 500)
            .with("error_type", "database"),
    )?;

    Ok(())
}
