use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Certification application model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Applying member
    pub member_id: Uuid,

    pub certification: String,

    /// pending, accepted or rejected
    pub status: String,

    pub reason: Option<String>,

    pub reviewed_by: Option<Uuid>,

    pub reviewed_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_application(
        &self,
    ) -> crate::utils::error::Result<crate::core::models::Application> {
        Ok(crate::core::models::Application {
            id: self.id,
            member_id: self.member_id,
            certification: self.certification.clone(),
            status: self.status.parse()?,
            reason: self.reason.clone(),
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at.map(|dt| dt.with_timezone(&chrono::Utc)),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}
