//! Core error type definitions

use thiserror::Error;

/// Result type alias for the admin core
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the admin core
#[derive(Error, Debug)]
pub enum AdminError {
    /// A privilege predicate denied the requested action
    #[error("Not authorized: {0}")]
    AuthorizationDenied(String),

    /// An insert, update or delete against the store failed
    #[error("Remote mutation failed: {0}")]
    RemoteMutationFailed(#[from] sea_orm::DbErr),

    /// A print job did not reach a terminal state before its deadline
    #[error("Print job {queue_id} timed out after {timeout_ms}ms")]
    QueueTimeout { queue_id: i32, timeout_ms: u64 },

    /// The print worker reported an error for the job
    #[error("Print job {queue_id} failed: {message}")]
    QueueFailed { queue_id: i32, message: String },

    /// A row returned by the store does not match the expected schema
    #[error("Malformed row: {0}")]
    MalformedRow(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
