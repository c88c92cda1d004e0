//! User-facing rendering of errors

use super::types::AdminError;
use serde::Serialize;

/// Coarse error category reported back to the initiating action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    AuthorizationDenied,
    RemoteMutationFailed,
    QueueTimeout,
    QueueFailed,
    MalformedRow,
    NotFound,
    Invalid,
    Internal,
}

impl AdminError {
    /// Category used by callers to pick a notification style
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdminError::AuthorizationDenied(_) => ErrorCategory::AuthorizationDenied,
            AdminError::RemoteMutationFailed(_) => ErrorCategory::RemoteMutationFailed,
            AdminError::QueueTimeout { .. } => ErrorCategory::QueueTimeout,
            AdminError::QueueFailed { .. } => ErrorCategory::QueueFailed,
            AdminError::MalformedRow(_) => ErrorCategory::MalformedRow,
            AdminError::NotFound(_) => ErrorCategory::NotFound,
            AdminError::Validation(_) => ErrorCategory::Invalid,
            AdminError::Config(_)
            | AdminError::Io(_)
            | AdminError::Yaml(_)
            | AdminError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Message shown to the user who started the action
    pub fn user_message(&self) -> String {
        match self {
            AdminError::AuthorizationDenied(action) => {
                format!("You are not authorized to {}", action)
            }
            AdminError::RemoteMutationFailed(err) => format!("The change was not saved: {}", err),
            AdminError::QueueTimeout { .. } => {
                "The printer did not answer in time. Check the printer before trying again."
                    .to_string()
            }
            // Reported verbatim from the print worker
            AdminError::QueueFailed { message, .. } => message.clone(),
            AdminError::NotFound(what) => format!("{} could not be found", what),
            AdminError::Validation(message) => message.clone(),
            _ => "An internal error occurred".to_string(),
        }
    }
}
