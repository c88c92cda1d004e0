use super::MemberService;
use crate::auth::ActorContext;
use crate::auth::rbac::{self, PrivilegeLevel};
use crate::core::models::{AuditAction, BulkReport, Member};
use crate::utils::error::Result;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

impl MemberService {
    /// Set a member's privilege level
    ///
    /// The actor must be able to edit the target at its current level and
    /// hand out `desired`. Targeting oneself additionally forbids raising
    /// one's own level.
    pub async fn change_privilege(
        &self,
        actor: &ActorContext,
        target_id: Uuid,
        desired: PrivilegeLevel,
    ) -> Result<Member> {
        actor.require(rbac::can_edit_privileges(actor.privilege), "edit privileges")?;

        let mut member = self.load(target_id).await?;
        let previous = member.privilege;

        actor.require(
            rbac::can_assign_privilege(actor.privilege, desired, Some(previous)),
            &format!("assign {} to a {} member", desired, previous),
        )?;
        if actor.is_self(target_id) {
            actor.require(
                rbac::can_set_own_privilege(actor.privilege, desired),
                "raise your own privilege level",
            )?;
        }

        self.db.update_member_privilege(target_id, desired).await?;
        member.privilege = desired;

        info!(
            "Member {} privilege changed {} -> {} by {}",
            target_id, previous, desired, actor.user_id
        );
        self.audit
            .record(
                actor,
                AuditAction::PrivilegeChanged,
                Some(target_id.to_string()),
                Some(json!({ "from": previous, "to": desired })),
            )
            .await;

        Ok(member)
    }

    /// Apply the same level to many members independently
    ///
    /// Each member is attempted on its own; failures are collected and
    /// already-applied changes are kept.
    pub async fn bulk_change_privilege(
        &self,
        actor: &ActorContext,
        member_ids: &[Uuid],
        desired: PrivilegeLevel,
    ) -> BulkReport {
        let mut report = BulkReport::default();

        for &member_id in member_ids {
            match self.change_privilege(actor, member_id, desired).await {
                Ok(_) => report.succeeded.push(member_id),
                Err(e) => report.failed.push((member_id, e)),
            }
        }

        info!(
            "Bulk privilege change to {} by {}: {} succeeded, {} failed",
            desired,
            actor.user_id,
            report.success_count(),
            report.error_count()
        );
        report
    }
}
