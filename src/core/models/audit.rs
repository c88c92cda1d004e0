//! Audit log entries

use crate::utils::error::{AdminError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Administrative action recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    MemberCreated,
    PrivilegeChanged,
    MemberBanned,
    MemberUnbanned,
    MembershipActivated,
    MembershipDeactivated,
    PasswordResetRequested,
    MemberDeleted,
    ApplicationAccepted,
    ApplicationRejected,
    PrintCardQueued,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::MemberCreated => "member_created",
            AuditAction::PrivilegeChanged => "privilege_changed",
            AuditAction::MemberBanned => "member_banned",
            AuditAction::MemberUnbanned => "member_unbanned",
            AuditAction::MembershipActivated => "membership_activated",
            AuditAction::MembershipDeactivated => "membership_deactivated",
            AuditAction::PasswordResetRequested => "password_reset_requested",
            AuditAction::MemberDeleted => "member_deleted",
            AuditAction::ApplicationAccepted => "application_accepted",
            AuditAction::ApplicationRejected => "application_rejected",
            AuditAction::PrintCardQueued => "print_card_queued",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self> {
        const ACTIONS: [AuditAction; 11] = [
            AuditAction::MemberCreated,
            AuditAction::PrivilegeChanged,
            AuditAction::MemberBanned,
            AuditAction::MemberUnbanned,
            AuditAction::MembershipActivated,
            AuditAction::MembershipDeactivated,
            AuditAction::PasswordResetRequested,
            AuditAction::MemberDeleted,
            AuditAction::ApplicationAccepted,
            AuditAction::ApplicationRejected,
            AuditAction::PrintCardQueued,
        ];

        ACTIONS
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AdminError::malformed(format!("Unknown audit action: {}", s)))
    }
}

/// One audit log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i32,
    pub actor_id: Uuid,
    pub action: AuditAction,
    /// Record the action was applied to
    pub target_id: Option<String>,
    /// Action-specific JSON payload
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
