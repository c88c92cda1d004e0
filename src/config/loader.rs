//! Configuration loading utilities
//!
//! This module provides loading configuration from environment variables.

use super::models::*;
use crate::utils::error::{AdminError, Result};
use std::env;
use tracing::debug;

impl AdminConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from defaults overlaid with the values `lookup`
    /// returns for the known keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Database configuration
        if let Some(db_url) = lookup("DATABASE_URL") {
            config.database.url = db_url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.database.max_connections = max_conn
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid max connections: {}", e)))?;
        }

        // Print queue configuration
        if let Some(timeout) = lookup("PRINT_QUEUE_TIMEOUT_MS") {
            config.print_queue.timeout_ms = timeout
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid print queue timeout: {}", e)))?;
        }
        if let Some(interval) = lookup("PRINT_QUEUE_POLL_INTERVAL_MS") {
            config.print_queue.poll_interval_ms = interval.parse().map_err(|e| {
                AdminError::Config(format!("Invalid print queue poll interval: {}", e))
            })?;
        }

        // Logging configuration
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = lookup("LOG_JSON") {
            config.logging.json = json
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid LOG_JSON flag: {}", e)))?;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}
