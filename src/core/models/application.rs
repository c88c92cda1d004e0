//! Certification applications

use crate::utils::error::{AdminError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Review status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Accepted => write!(f, "accepted"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(AdminError::malformed(format!(
                "Invalid application status: {}",
                s
            ))),
        }
    }
}

/// A member's application for a certification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub member_id: Uuid,
    /// Name of the certification applied for
    pub certification: String,
    pub status: ApplicationStatus,
    /// Rejection reason
    pub reason: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Application {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}
