//! Routing the `log` macros through daylog.
//!
//! Run with:
//! ```bash
//! cargo run --example facade --features facade
//! ```

use daylog::{LogConfig, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    daylog::install_facade(Logger::new(
        LogConfig::new()
            .with_directory("logs")
            .with_host("localhost"),
    ))?;

    log::info!("This is an info message");
    log::warn!("This is a warning message");
    log::error!("Request failed with status {}", 500);

    log::logger().flush();

    Ok(())
}
