//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level when set.

use crate::config::LoggingConfig;
use crate::utils::error::{AdminError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for the configured level, honouring `RUST_LOG`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            AdminError::config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Initialize the global tracing subscriber
///
/// Calling this twice is not an error; the second subscriber is ignored.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_thread_ids(false)
            .try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
