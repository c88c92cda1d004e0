//! Test fixtures and data factories
//!
//! Members are written straight to the store so tests can start from any
//! privilege layout without going through authorization.

use chrono::Utc;
use member_admin::storage::Database;
use member_admin::{Member, PrivilegeLevel};
use uuid::Uuid;

/// Factory for creating test members
pub struct MemberFactory;

impl MemberFactory {
    /// Build an active member at `privilege`
    pub fn build(privilege: PrivilegeLevel) -> Member {
        let tag = &Uuid::new_v4().to_string()[..8];
        Member {
            id: Uuid::new_v4(),
            firstname: format!("Test{}", tag),
            lastname: privilege.to_string(),
            email: format!("member-{}@example.org", tag),
            privilege,
            is_membership_active: true,
            is_banned: false,
            created_at: Utc::now(),
            created_by: None,
            password_set_at: Some(Utc::now()),
        }
    }

    /// Insert an active member at `privilege`
    pub async fn seed(db: &Database, privilege: PrivilegeLevel) -> Member {
        Self::insert(db, Self::build(privilege)).await
    }

    /// Insert a banned member at `privilege`
    pub async fn seed_banned(db: &Database, privilege: PrivilegeLevel) -> Member {
        let mut member = Self::build(privilege);
        member.is_banned = true;
        Self::insert(db, member).await
    }

    async fn insert(db: &Database, member: Member) -> Member {
        db.insert_member(&member)
            .await
            .expect("Failed to insert test member");
        member
    }
}
