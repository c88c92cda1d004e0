//! Acting-user context

use super::rbac::{Capability, PrivilegeLevel};
use crate::storage::Database;
use crate::utils::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// The user on whose behalf an operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    pub user_id: Uuid,
    /// `None` when the actor is unknown or banned; every predicate denies it
    pub privilege: Option<PrivilegeLevel>,
}

impl ActorContext {
    pub fn new(user_id: Uuid, privilege: Option<PrivilegeLevel>) -> Self {
        Self { user_id, privilege }
    }

    /// Load the actor's current level from the members table
    pub async fn resolve(db: &Database, user_id: Uuid) -> Result<Self> {
        let privilege = match db.find_member(user_id).await? {
            Some(member) if member.is_banned => {
                warn!("Actor {} is banned, resolving without privileges", user_id);
                None
            }
            Some(member) => Some(member.privilege),
            None => {
                warn!("Actor {} not found, resolving without privileges", user_id);
                None
            }
        };

        debug!("Resolved actor {} at {:?}", user_id, privilege);
        Ok(Self { user_id, privilege })
    }

    /// Turn a predicate result into an authorization error naming `action`
    pub fn require(&self, allowed: bool, action: &str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            warn!(
                "Denied {} for actor {} at {:?}",
                action, self.user_id, self.privilege
            );
            Err(AdminError::denied(action))
        }
    }

    pub fn require_capability(&self, capability: Capability) -> Result<()> {
        self.require(capability.allows(self.privilege), capability.action())
    }

    pub fn is_self(&self, member_id: Uuid) -> bool {
        self.user_id == member_id
    }

    /// Acting on one's own record; banned or unknown actors never qualify
    pub fn is_active_self(&self, member_id: Uuid) -> bool {
        self.privilege.is_some() && self.is_self(member_id)
    }
}
