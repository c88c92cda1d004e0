//! Print queue configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Print queue watcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintQueueConfig {
    /// Deadline for a print job to reach a terminal state
    #[serde(default = "default_print_timeout_ms")]
    pub timeout_ms: u64,
    /// Interval between reads of the watched row
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for PrintQueueConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_print_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl PrintQueueConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.timeout_ms != default_print_timeout_ms() {
            self.timeout_ms = other.timeout_ms;
        }
        if other.poll_interval_ms != default_poll_interval_ms() {
            self.poll_interval_ms = other.poll_interval_ms;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
