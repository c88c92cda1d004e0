use super::MemberService;
use crate::auth::rbac;
use crate::auth::{ActorContext, Capability};
use crate::core::models::{AuditAction, Member, NewMember};
use crate::utils::error::{AdminError, Result};
use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

impl MemberService {
    /// Create a member at the requested level
    pub async fn create_member(
        &self,
        actor: &ActorContext,
        new_member: NewMember,
    ) -> Result<Member> {
        actor.require(
            rbac::can_create_member(actor.privilege, new_member.privilege),
            &format!("create {} members", new_member.privilege),
        )?;
        new_member.validate()?;

        let email = new_member.email.trim().to_lowercase();
        if self.db.find_member_by_email(&email).await?.is_some() {
            return Err(AdminError::validation(format!(
                "A member with email {} already exists",
                email
            )));
        }

        let member = Member {
            id: Uuid::new_v4(),
            firstname: new_member.firstname.trim().to_string(),
            lastname: new_member.lastname.trim().to_string(),
            email,
            privilege: new_member.privilege,
            is_membership_active: new_member.is_membership_active,
            is_banned: false,
            created_at: Utc::now(),
            created_by: Some(actor.user_id),
            password_set_at: None,
        };
        self.db.insert_member(&member).await?;

        info!(
            "Member {} created at {} by {}",
            member.id, member.privilege, actor.user_id
        );
        self.audit
            .record(
                actor,
                AuditAction::MemberCreated,
                Some(member.id.to_string()),
                Some(json!({ "email": member.email, "privilege": member.privilege })),
            )
            .await;

        Ok(member)
    }

    /// Ban or unban a member
    pub async fn set_banned(
        &self,
        actor: &ActorContext,
        member_id: Uuid,
        banned: bool,
    ) -> Result<()> {
        actor.require_capability(Capability::BanMembers)?;
        if actor.is_self(member_id) {
            return Err(AdminError::validation("You cannot ban yourself"));
        }

        self.db.update_member_banned(member_id, banned).await?;

        info!("Member {} banned={} by {}", member_id, banned, actor.user_id);
        let action = if banned {
            AuditAction::MemberBanned
        } else {
            AuditAction::MemberUnbanned
        };
        self.audit
            .record(actor, action, Some(member_id.to_string()), None)
            .await;

        Ok(())
    }

    /// Activate or deactivate a membership
    pub async fn set_membership_active(
        &self,
        actor: &ActorContext,
        member_id: Uuid,
        active: bool,
    ) -> Result<()> {
        actor.require_capability(Capability::ManageMembershipStatus)?;

        self.db.update_membership_active(member_id, active).await?;

        info!(
            "Member {} membership active={} by {}",
            member_id, active, actor.user_id
        );
        let action = if active {
            AuditAction::MembershipActivated
        } else {
            AuditAction::MembershipDeactivated
        };
        self.audit
            .record(actor, action, Some(member_id.to_string()), None)
            .await;

        Ok(())
    }

    /// Force the member to set a new password on next sign-in
    pub async fn request_password_reset(
        &self,
        actor: &ActorContext,
        member_id: Uuid,
    ) -> Result<()> {
        actor.require_capability(Capability::ResetPasswords)?;

        self.db.clear_member_password(member_id).await?;

        info!("Password reset requested for {} by {}", member_id, actor.user_id);
        self.audit
            .record(
                actor,
                AuditAction::PasswordResetRequested,
                Some(member_id.to_string()),
                None,
            )
            .await;

        Ok(())
    }

    /// Permanently delete a member
    pub async fn delete_member(&self, actor: &ActorContext, member_id: Uuid) -> Result<()> {
        actor.require_capability(Capability::DeleteMembers)?;
        if actor.is_self(member_id) {
            return Err(AdminError::validation("You cannot delete yourself"));
        }

        if !self.db.delete_member(member_id).await? {
            return Err(AdminError::not_found(format!("Member {}", member_id)));
        }

        info!("Member {} deleted by {}", member_id, actor.user_id);
        self.audit
            .record(
                actor,
                AuditAction::MemberDeleted,
                Some(member_id.to_string()),
                None,
            )
            .await;

        Ok(())
    }
}
