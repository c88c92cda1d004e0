//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use tracing::debug;

/// Validation for a configuration section
///
/// Errors are plain strings; `Config::validate` wraps them with the section
/// name.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let supported = ["sqlite:", "postgres://", "postgresql://"];
        if !supported.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err(format!("Unsupported database URL scheme: {}", self.url));
        }

        if self.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }

        if self.is_in_memory() && self.max_connections != 1 {
            debug!("In-memory SQLite only shares state over a single connection");
        }

        Ok(())
    }
}

impl Validate for PrintQueueConfig {
    fn validate(&self) -> Result<(), String> {
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be greater than 0".to_string());
        }

        if self.poll_interval_ms >= self.timeout_ms {
            return Err(format!(
                "poll_interval_ms ({}) must be smaller than timeout_ms ({})",
                self.poll_interval_ms, self.timeout_ms
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
