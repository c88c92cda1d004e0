//! Audit log tests

#[cfg(test)]
mod tests {
    use crate::common::{MemberFactory, TestDatabase};
    use member_admin::{AdminError, AuditAction, PrivilegeLevel};

    #[tokio::test]
    async fn test_mutations_are_audited_newest_first() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), PrivilegeLevel::Board).await;
        let target = MemberFactory::seed(db.db(), PrivilegeLevel::Member).await;
        let actor = db.actor(board.id).await;

        core.members()
            .change_privilege(&actor, target.id, PrivilegeLevel::Volunteer)
            .await
            .unwrap();
        core.members()
            .set_banned(&actor, target.id, true)
            .await
            .unwrap();

        let entries = core.audit().list(&actor, 10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AuditAction::MemberBanned);
        assert_eq!(entries[1].action, AuditAction::PrivilegeChanged);
        assert!(entries.iter().all(|e| e.actor_id == board.id));

        let details = entries[1].details.as_ref().unwrap();
        assert_eq!(details["from"], 1);
        assert_eq!(details["to"], 2);
    }

    #[tokio::test]
    async fn test_denied_mutations_are_not_audited() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let board = MemberFactory::seed(db.db(), PrivilegeLevel::Board).await;

        let volunteer_actor = db.actor(volunteer.id).await;
        let _ = core
            .members()
            .delete_member(&volunteer_actor, board.id)
            .await;

        let board_actor = db.actor(board.id).await;
        assert!(core.audit().list(&board_actor, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_requires_board_and_honours_limit() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let it = MemberFactory::seed(db.db(), PrivilegeLevel::It).await;
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let actor = db.actor(it.id).await;

        for _ in 0..3 {
            let member = MemberFactory::seed(db.db(), PrivilegeLevel::Member).await;
            core.members()
                .request_password_reset(&actor, member.id)
                .await
                .unwrap();
        }

        assert_eq!(core.audit().list(&actor, 2).await.unwrap().len(), 2);

        let volunteer_actor = db.actor(volunteer.id).await;
        assert!(matches!(
            core.audit().list(&volunteer_actor, 10).await,
            Err(AdminError::AuthorizationDenied(_))
        ));
    }
}
