//! Configuration management for the admin core
//!
//! This module handles loading, validation, and merging of all configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AdminError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Admin core configuration
    pub admin: AdminConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AdminError::Config(format!("Failed to read config file: {}", e)))?;

        let admin: AdminConfig = serde_yaml::from_str(&content)
            .map_err(|e| AdminError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { admin };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let admin = AdminConfig::from_env()?;
        let config = Self { admin };

        config.validate()?;
        Ok(config)
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.admin.database
    }

    /// Get print queue configuration
    pub fn print_queue(&self) -> &PrintQueueConfig {
        &self.admin.print_queue
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.admin.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.admin
            .database
            .validate()
            .map_err(|e| AdminError::Config(format!("Database config error: {}", e)))?;

        self.admin
            .print_queue
            .validate()
            .map_err(|e| AdminError::Config(format!("Print queue config error: {}", e)))?;

        self.admin
            .logging
            .validate()
            .map_err(|e| AdminError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.admin = self.admin.merge(other.admin);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.admin)
            .map_err(|e| AdminError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
