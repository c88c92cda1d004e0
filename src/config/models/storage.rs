//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/member-admin.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Log every statement at debug level
    #[serde(default)]
    pub sql_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            sql_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != DEFAULT_DATABASE_URL {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.sql_logging {
            self.sql_logging = other.sql_logging;
        }
        self
    }

    /// Whether the URL points at an in-memory SQLite database
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:")
    }
}
