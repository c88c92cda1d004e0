//! Audit log service
//!
//! Every successful administrative mutation appends one entry. Writing the
//! entry never fails the mutation it describes.

use crate::auth::{ActorContext, Capability};
use crate::core::models::{AuditAction, AuditEntry};
use crate::storage::Database;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of entries returned by [`AuditLog::list`]
pub const DEFAULT_AUDIT_LIMIT: u64 = 100;

/// Append-only audit log
#[derive(Clone)]
pub struct AuditLog {
    db: Arc<Database>,
}

impl AuditLog {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Record an action taken by `actor`
    ///
    /// Failures are logged and swallowed: the audited change has already
    /// been applied.
    pub async fn record(
        &self,
        actor: &ActorContext,
        action: AuditAction,
        target: Option<String>,
        details: Option<serde_json::Value>,
    ) {
        debug!("Audit: {} by {} on {:?}", action, actor.user_id, target);

        if let Err(e) = self
            .db
            .insert_audit_entry(actor.user_id, action, target, details.as_ref())
            .await
        {
            warn!("Failed to record audit entry {}: {}", action, e);
        }
    }

    /// Most recent entries, newest first
    pub async fn list(&self, actor: &ActorContext, limit: u64) -> Result<Vec<AuditEntry>> {
        actor.require_capability(Capability::ViewAuditLogs)?;
        self.db.list_audit_entries(limit).await
    }
}
