//! Top-level admin configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Admin core configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Print queue configuration
    #[serde(default)]
    pub print_queue: PrintQueueConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AdminConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.database = self.database.merge(other.database);
        self.print_queue = self.print_queue.merge(other.print_queue);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
