//! Member administration
//!
//! Each operation authorizes the actor against the privilege lattice before
//! touching the store, then writes an audit entry once the change is applied.

mod lifecycle;
mod privileges;

use crate::auth::{ActorContext, Capability};
use crate::core::audit::AuditLog;
use crate::core::models::Member;
use crate::storage::Database;
use crate::utils::error::{AdminError, Result};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Member administration service
#[derive(Clone)]
pub struct MemberService {
    db: Arc<Database>,
    audit: AuditLog,
}

impl MemberService {
    pub fn new(db: Arc<Database>, audit: AuditLog) -> Self {
        Self { db, audit }
    }

    /// All members, ordered by name
    pub async fn list_members(&self, actor: &ActorContext) -> Result<Vec<Member>> {
        actor.require_capability(Capability::ViewMembers)?;
        self.db.list_members().await
    }

    /// A single member; active members may always read their own record
    pub async fn get_member(&self, actor: &ActorContext, member_id: Uuid) -> Result<Member> {
        let allowed =
            actor.is_active_self(member_id) || Capability::ViewMembers.allows(actor.privilege);
        actor.require(allowed, Capability::ViewMembers.action())?;

        debug!("Loading member {} for {}", member_id, actor.user_id);
        self.load(member_id).await
    }

    async fn load(&self, member_id: Uuid) -> Result<Member> {
        self.db
            .find_member(member_id)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Member {}", member_id)))
    }
}
