//! Helper functions for creating specific error types

use super::types::AdminError;

/// Helper functions for creating specific errors
impl AdminError {
    pub fn denied<S: Into<String>>(message: S) -> Self {
        Self::AuthorizationDenied(message.into())
    }

    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedRow(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Every failure in the admin core is terminal: nothing is retried
    /// automatically, the caller decides whether to try again.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Whether this error came from a privilege check
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AuthorizationDenied(_))
    }
}
