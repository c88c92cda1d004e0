//! Member records

use super::PrivilegeLevel;
use crate::utils::error::{AdminError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Member ID
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    /// Email address (unique)
    pub email: String,
    /// Administrative rank
    pub privilege: PrivilegeLevel,
    pub is_membership_active: bool,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
    /// Actor who created the record, if created through the admin core
    pub created_by: Option<Uuid>,
    /// When the member last set a password; `None` forces a reset
    pub password_set_at: Option<DateTime<Utc>>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Input for creating a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default = "default_privilege")]
    pub privilege: PrivilegeLevel,
    #[serde(default)]
    pub is_membership_active: bool,
}

fn default_privilege() -> PrivilegeLevel {
    PrivilegeLevel::Member
}

impl NewMember {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            privilege: PrivilegeLevel::Member,
            is_membership_active: false,
        }
    }

    pub fn with_privilege(mut self, privilege: PrivilegeLevel) -> Self {
        self.privilege = privilege;
        self
    }

    pub fn active(mut self) -> Self {
        self.is_membership_active = true;
        self
    }

    /// Reject blank names and obviously invalid email addresses
    pub fn validate(&self) -> Result<()> {
        if self.firstname.trim().is_empty() || self.lastname.trim().is_empty() {
            return Err(AdminError::validation("First and last name are required"));
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(AdminError::validation(format!(
                "Invalid email address: {}",
                self.email
            ))),
        }
    }
}

/// Outcome of a best-effort operation applied to many members
#[derive(Debug, Default)]
pub struct BulkReport {
    pub succeeded: Vec<Uuid>,
    pub failed: Vec<(Uuid, AdminError)>,
}

impl BulkReport {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn error_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}
