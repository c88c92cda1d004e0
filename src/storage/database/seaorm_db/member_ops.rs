use crate::auth::rbac::PrivilegeLevel;
use crate::core::models::Member;
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, member};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find member by ID
    pub async fn find_member(&self, member_id: Uuid) -> Result<Option<Member>> {
        debug!("Finding member by ID: {}", member_id);

        entities::Member::find_by_id(member_id)
            .one(&self.db)
            .await?
            .map(|model| model.to_domain_member())
            .transpose()
    }

    /// Find member by email
    pub async fn find_member_by_email(&self, email: &str) -> Result<Option<Member>> {
        debug!("Finding member by email: {}", email);

        entities::Member::find()
            .filter(member::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(|model| model.to_domain_member())
            .transpose()
    }

    /// List all members ordered by name
    pub async fn list_members(&self) -> Result<Vec<Member>> {
        entities::Member::find()
            .order_by_asc(member::Column::Lastname)
            .order_by_asc(member::Column::Firstname)
            .all(&self.db)
            .await?
            .iter()
            .map(member::Model::to_domain_member)
            .collect()
    }

    /// Insert a new member
    pub async fn insert_member(&self, member: &Member) -> Result<()> {
        debug!("Inserting member: {}", member.email);

        let active_model = member::Model::from_domain_member(member);
        entities::Member::insert(active_model).exec(&self.db).await?;

        Ok(())
    }

    /// Load a member row for update
    async fn member_for_update(&self, member_id: Uuid) -> Result<member::ActiveModel> {
        Ok(entities::Member::find_by_id(member_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Member {}", member_id)))?
            .into())
    }

    /// Update member privilege level
    pub async fn update_member_privilege(
        &self,
        member_id: Uuid,
        privilege: PrivilegeLevel,
    ) -> Result<()> {
        debug!("Updating privilege for member {} -> {}", member_id, privilege);

        let mut member = self.member_for_update(member_id).await?;
        member.privilege_type = Set(privilege.as_i32());
        member.update(&self.db).await?;

        Ok(())
    }

    /// Update member ban flag
    pub async fn update_member_banned(&self, member_id: Uuid, banned: bool) -> Result<()> {
        debug!("Updating ban flag for member {} -> {}", member_id, banned);

        let mut member = self.member_for_update(member_id).await?;
        member.is_banned = Set(banned);
        member.update(&self.db).await?;

        Ok(())
    }

    /// Update membership status flag
    pub async fn update_membership_active(&self, member_id: Uuid, active: bool) -> Result<()> {
        debug!("Updating membership status for {} -> {}", member_id, active);

        let mut member = self.member_for_update(member_id).await?;
        member.is_membership_active = Set(active);
        member.update(&self.db).await?;

        Ok(())
    }

    /// Clear the password timestamp so the member must set a new one
    pub async fn clear_member_password(&self, member_id: Uuid) -> Result<()> {
        debug!("Clearing password timestamp for member {}", member_id);

        let mut member = self.member_for_update(member_id).await?;
        member.password_set_at = Set(None);
        member.update(&self.db).await?;

        Ok(())
    }

    /// Delete a member; returns whether a row was removed
    pub async fn delete_member(&self, member_id: Uuid) -> Result<bool> {
        debug!("Deleting member {}", member_id);

        let result = entities::Member::delete_by_id(member_id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
