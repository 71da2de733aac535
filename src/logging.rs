//! Console subscriber for the library's `tracing` events.

use crate::config::{ConfigError, LoggingConfig};

/// Install a fmt subscriber at the configured level.
///
/// Only the first call in a process installs anything; later calls are
/// accepted and ignored so every demo and test can call this freely.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let level = config.level()?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
    Ok(())
}
