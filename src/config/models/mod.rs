//! Configuration data models
//!
//! This module defines all configuration structures used by the admin core.

pub mod admin;
pub mod logging;
pub mod print_queue;
pub mod storage;

// Re-export all configuration types
pub use admin::*;
pub use logging::*;
pub use print_queue::*;
pub use storage::*;

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default print job deadline in milliseconds
pub fn default_print_timeout_ms() -> u64 {
    25_000
}

/// Default interval between print job reads in milliseconds
pub fn default_poll_interval_ms() -> u64 {
    500
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
