use crate::utils::error::AdminError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Audit log model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Acting member
    pub actor_id: Uuid,

    pub action: String,

    pub target_id: Option<String>,

    /// Details (JSON)
    pub details: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_entry(
        &self,
    ) -> crate::utils::error::Result<crate::core::models::AuditEntry> {
        let details = self
            .details
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .map_err(|e| AdminError::malformed(format!("audit details: {}", e)))?;

        Ok(crate::core::models::AuditEntry {
            id: self.id,
            actor_id: self.actor_id,
            action: self.action.parse()?,
            target_id: self.target_id.clone(),
            details,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}
