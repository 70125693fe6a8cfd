//! Example of loading logger configuration from a YAML file.
//!
//! This example demonstrates how to load the logger configuration from
//! a YAML file and write entries with it.
//!
//! Run with:
//! ```bash
//! cargo run --example config_yaml
//! ```

use std::collections::HashMap;
use std::fs;

use daylog::{Context, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read the YAML configuration file
    let config_path = "demos/config.yaml";
    let config_content = fs::read_to_string(config_path)
        .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));

    // Parse the YAML configuration
    let root: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(&config_content)?;
    let config: daylog::LogConfig = serde_yaml::from_value(root["log"].clone())?;

    let logger = Logger::new(config);

    // Log some messages
    logger.debug("This is a debug message", Context::new())?;
    logger.info("This is an info message", Context::new())?;
    logger.notice("This is a notice message", Context::new())?;
    logger.warning("This is a warning message", Context::new())?;
    logger.error("This is an error message", Context::new())?;

    // Log with structured data
    logger.info(
        "User performed an action",
        Context::new().with("user", "alice").with("action", "login"),
    )?;

    logger.warning(
        "Resource not found",
        Context::new()
            .with("error_code", 404)
            .with("path", "/api/users"),
    )?;

    Ok(())
}
