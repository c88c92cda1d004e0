//! Certification application review

use crate::auth::{ActorContext, Capability};
use crate::core::audit::AuditLog;
use crate::core::models::{Application, ApplicationStatus, AuditAction};
use crate::storage::Database;
use crate::utils::error::{AdminError, Result};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Certification application service
#[derive(Clone)]
pub struct ApplicationService {
    db: Arc<Database>,
    audit: AuditLog,
}

impl ApplicationService {
    pub fn new(db: Arc<Database>, audit: AuditLog) -> Self {
        Self { db, audit }
    }

    /// File a new application; members file their own, Volunteer+ may file for anyone
    pub async fn submit(
        &self,
        actor: &ActorContext,
        member_id: Uuid,
        certification: &str,
    ) -> Result<Application> {
        let allowed =
            actor.is_active_self(member_id) || Capability::ViewMembers.allows(actor.privilege);
        actor.require(allowed, "submit applications for other members")?;

        let certification = certification.trim();
        if certification.is_empty() {
            return Err(AdminError::validation("Certification name is required"));
        }
        if self.db.find_member(member_id).await?.is_none() {
            return Err(AdminError::not_found(format!("Member {}", member_id)));
        }

        let application = Application {
            id: Uuid::new_v4(),
            member_id,
            certification: certification.to_string(),
            status: ApplicationStatus::Pending,
            reason: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
        };
        self.db.insert_application(&application).await?;

        info!(
            "Application {} for {} submitted by {}",
            application.id, application.certification, actor.user_id
        );
        Ok(application)
    }

    /// Applications waiting for review, oldest first
    pub async fn list_pending(&self, actor: &ActorContext) -> Result<Vec<Application>> {
        actor.require_capability(Capability::ViewMembers)?;
        self.db.list_applications(ApplicationStatus::Pending).await
    }

    pub async fn accept(&self, actor: &ActorContext, application_id: Uuid) -> Result<Application> {
        self.review(actor, application_id, ApplicationStatus::Accepted, None)
            .await
    }

    pub async fn reject(
        &self,
        actor: &ActorContext,
        application_id: Uuid,
        reason: impl Into<String>,
    ) -> Result<Application> {
        self.review(
            actor,
            application_id,
            ApplicationStatus::Rejected,
            Some(reason.into()),
        )
        .await
    }

    async fn review(
        &self,
        actor: &ActorContext,
        application_id: Uuid,
        status: ApplicationStatus,
        reason: Option<String>,
    ) -> Result<Application> {
        actor.require_capability(Capability::ManageMembers)?;

        let current = self
            .db
            .find_application(application_id)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Application {}", application_id)))?;
        if !current.is_pending() {
            return Err(AdminError::validation(format!(
                "Application {} was already {}",
                application_id, current.status
            )));
        }

        let reviewed = self
            .db
            .update_application_review(application_id, status, actor.user_id, reason)
            .await?;

        info!(
            "Application {} {} by {}",
            application_id, status, actor.user_id
        );
        let action = match status {
            ApplicationStatus::Rejected => AuditAction::ApplicationRejected,
            _ => AuditAction::ApplicationAccepted,
        };
        self.audit
            .record(
                actor,
                action,
                Some(application_id.to_string()),
                Some(json!({
                    "member_id": reviewed.member_id,
                    "certification": reviewed.certification,
                    "reason": reviewed.reason,
                })),
            )
            .await;

        Ok(reviewed)
    }
}
