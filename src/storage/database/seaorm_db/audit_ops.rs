use crate::core::models::{AuditAction, AuditEntry};
use crate::utils::error::Result;
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, audit_log};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Append an audit entry
    pub async fn insert_audit_entry(
        &self,
        actor_id: Uuid,
        action: AuditAction,
        target_id: Option<String>,
        details: Option<&serde_json::Value>,
    ) -> Result<()> {
        let active_model = audit_log::ActiveModel {
            actor_id: Set(actor_id),
            action: Set(action.to_string()),
            target_id: Set(target_id),
            details: Set(details.map(serde_json::Value::to_string)),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        entities::AuditLog::insert(active_model)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Most recent audit entries, newest first
    pub async fn list_audit_entries(&self, limit: u64) -> Result<Vec<AuditEntry>> {
        entities::AuditLog::find()
            .order_by_desc(audit_log::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?
            .iter()
            .map(audit_log::Model::to_domain_entry)
            .collect()
    }
}
