// Module declarations
mod application_ops;
mod audit_ops;
mod connection;
mod member_ops;
mod print_queue_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
