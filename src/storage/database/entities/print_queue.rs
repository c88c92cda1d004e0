use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Membership card print queue model
///
/// Rows are inserted by the admin core and updated once by the external
/// print worker.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "printer_queue")]
pub struct Model {
    /// Queue ID
    #[sea_orm(primary_key)]
    pub id: i32,

    pub firstname: String,

    pub lastname: String,

    pub email: String,

    /// Member the card belongs to
    #[sea_orm(column_name = "ref")]
    pub member_ref: Uuid,

    /// Actor who queued the job
    pub ref_invoker: Uuid,

    /// Selects the volunteer card template
    pub is_voluntary: bool,

    /// Set by the print worker on success
    pub completed: bool,

    /// Set by the print worker on failure
    pub error_msg: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain_job(&self) -> crate::core::models::PrintJob {
        crate::core::models::PrintJob {
            id: self.id,
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            email: self.email.clone(),
            member_ref: self.member_ref,
            ref_invoker: self.ref_invoker,
            is_voluntary: self.is_voluntary,
            completed: self.completed,
            error_msg: self.error_msg.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}
