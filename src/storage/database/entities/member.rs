use crate::auth::rbac::PrivilegeLevel;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// Member ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub firstname: String,

    pub lastname: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Privilege level, 1 (member) to 5 (IT)
    pub privilege_type: i32,

    pub is_membership_active: bool,

    pub is_banned: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Creating actor
    pub created_by: Option<Uuid>,

    /// Last password change
    pub password_set_at: Option<DateTimeWithTimeZone>,
}

/// Member entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Certification applications relation
    #[sea_orm(has_many = "super::application::Entity")]
    Applications,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain member, rejecting unknown privilege values
    pub fn to_domain_member(
        &self,
    ) -> crate::utils::error::Result<crate::core::models::Member> {
        let privilege = PrivilegeLevel::try_from(self.privilege_type)?;

        Ok(crate::core::models::Member {
            id: self.id,
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            email: self.email.clone(),
            privilege,
            is_membership_active: self.is_membership_active,
            is_banned: self.is_banned,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            created_by: self.created_by,
            password_set_at: self
                .password_set_at
                .map(|dt| dt.with_timezone(&chrono::Utc)),
        })
    }

    /// Convert domain member to SeaORM active model
    pub fn from_domain_member(member: &crate::core::models::Member) -> ActiveModel {
        ActiveModel {
            id: Set(member.id),
            firstname: Set(member.firstname.clone()),
            lastname: Set(member.lastname.clone()),
            email: Set(member.email.clone()),
            privilege_type: Set(member.privilege.as_i32()),
            is_membership_active: Set(member.is_membership_active),
            is_banned: Set(member.is_banned),
            created_at: Set(member.created_at.into()),
            created_by: Set(member.created_by),
            password_set_at: Set(member.password_set_at.map(|dt| dt.into())),
        }
    }
}
