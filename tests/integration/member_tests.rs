//! Member administration tests
//!
//! Authorization is enforced by the services themselves, so every denial
//! here must leave the stored row untouched.

#[cfg(test)]
mod tests {
    use crate::common::{MemberFactory, TestDatabase};
    use member_admin::{AdminError, NewMember, PrivilegeLevel};
    use uuid::Uuid;

    use PrivilegeLevel::*;

    async fn stored_level(db: &TestDatabase, id: Uuid) -> PrivilegeLevel {
        db.db().find_member(id).await.unwrap().unwrap().privilege
    }

    // ==================== Actor Resolution ====================

    #[tokio::test]
    async fn test_banned_and_unknown_actors_resolve_without_privilege() {
        let db = TestDatabase::new().await;
        let banned = MemberFactory::seed_banned(db.db(), Board).await;

        assert_eq!(db.actor(banned.id).await.privilege, None);
        assert_eq!(db.actor(Uuid::new_v4()).await.privilege, None);

        let board = MemberFactory::seed(db.db(), Board).await;
        assert_eq!(db.actor(board.id).await.privilege, Some(Board));
    }

    #[tokio::test]
    async fn test_banned_actor_cannot_act() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let banned = MemberFactory::seed_banned(db.db(), It).await;
        let target = MemberFactory::seed(db.db(), Member).await;

        let actor = db.actor(banned.id).await;
        let result = core.members().change_privilege(&actor, target.id, Volunteer).await;

        assert!(matches!(result, Err(AdminError::AuthorizationDenied(_))));
        assert_eq!(stored_level(&db, target.id).await, Member);
    }

    // ==================== Privilege Changes ====================

    #[tokio::test]
    async fn test_board_promotes_member() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), Board).await;
        let target = MemberFactory::seed(db.db(), Member).await;

        let actor = db.actor(board.id).await;
        let updated = core
            .members()
            .change_privilege(&actor, target.id, It)
            .await
            .unwrap();

        assert_eq!(updated.privilege, It);
        assert_eq!(stored_level(&db, target.id).await, It);
    }

    #[tokio::test]
    async fn test_volunteer_cannot_promote_above_own_level() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), Volunteer).await;
        let target = MemberFactory::seed(db.db(), Member).await;
        let actor = db.actor(volunteer.id).await;

        let denied = core
            .members()
            .change_privilege(&actor, target.id, GroupLeader)
            .await;
        assert!(matches!(denied, Err(AdminError::AuthorizationDenied(_))));
        assert_eq!(stored_level(&db, target.id).await, Member);

        core.members()
            .change_privilege(&actor, target.id, Volunteer)
            .await
            .unwrap();
        assert_eq!(stored_level(&db, target.id).await, Volunteer);
    }

    #[tokio::test]
    async fn test_volunteer_cannot_touch_higher_target() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), Volunteer).await;
        let leader = MemberFactory::seed(db.db(), GroupLeader).await;
        let actor = db.actor(volunteer.id).await;

        let result = core.members().change_privilege(&actor, leader.id, Member).await;

        assert!(matches!(result, Err(AdminError::AuthorizationDenied(_))));
        assert_eq!(stored_level(&db, leader.id).await, GroupLeader);
    }

    #[tokio::test]
    async fn test_group_leader_cannot_assign_anything() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let leader = MemberFactory::seed(db.db(), GroupLeader).await;
        let target = MemberFactory::seed(db.db(), Member).await;
        let actor = db.actor(leader.id).await;

        let result = core.members().change_privilege(&actor, target.id, Member).await;
        assert!(matches!(result, Err(AdminError::AuthorizationDenied(_))));
    }

    #[tokio::test]
    async fn test_self_demotion_allowed_self_promotion_denied() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), Board).await;
        let actor = db.actor(board.id).await;

        // Within the Board ceiling, but above the actor's own level
        let result = core.members().change_privilege(&actor, board.id, It).await;
        assert!(matches!(result, Err(AdminError::AuthorizationDenied(_))));
        assert_eq!(stored_level(&db, board.id).await, Board);

        core.members()
            .change_privilege(&actor, board.id, Volunteer)
            .await
            .unwrap();
        assert_eq!(stored_level(&db, board.id).await, Volunteer);
    }

    #[tokio::test]
    async fn test_change_privilege_of_missing_member() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), Board).await;
        let actor = db.actor(board.id).await;

        let result = core
            .members()
            .change_privilege(&actor, Uuid::new_v4(), Volunteer)
            .await;
        assert!(matches!(result, Err(AdminError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_bulk_change_is_best_effort() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), Volunteer).await;
        let first = MemberFactory::seed(db.db(), Member).await;
        let board = MemberFactory::seed(db.db(), Board).await;
        let last = MemberFactory::seed(db.db(), Member).await;
        let missing = Uuid::new_v4();
        let actor = db.actor(volunteer.id).await;

        let report = core
            .members()
            .bulk_change_privilege(&actor, &[first.id, board.id, missing, last.id], Volunteer)
            .await;

        assert_eq!(report.succeeded, vec![first.id, last.id]);
        assert_eq!(report.error_count(), 2);
        assert!(matches!(
            report.failed[0],
            (id, AdminError::AuthorizationDenied(_)) if id == board.id
        ));
        assert!(matches!(report.failed[1], (id, AdminError::NotFound(_)) if id == missing));

        // No rollback of applied changes
        assert_eq!(stored_level(&db, first.id).await, Volunteer);
        assert_eq!(stored_level(&db, last.id).await, Volunteer);
        assert_eq!(stored_level(&db, board.id).await, Board);
    }

    // ==================== Creation ====================

    #[tokio::test]
    async fn test_create_member_within_ceiling() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), Volunteer).await;
        let actor = db.actor(volunteer.id).await;

        let created = core
            .members()
            .create_member(
                &actor,
                NewMember::new("Grace", "Hopper", " Grace@Example.org ").with_privilege(Volunteer),
            )
            .await
            .unwrap();

        assert_eq!(created.email, "grace@example.org");
        assert_eq!(created.created_by, Some(volunteer.id));
        assert!(created.password_set_at.is_none());

        let denied = core
            .members()
            .create_member(
                &actor,
                NewMember::new("Alan", "Turing", "alan@example.org").with_privilege(Board),
            )
            .await;
        assert!(matches!(denied, Err(AdminError::AuthorizationDenied(_))));
        assert!(
            db.db()
                .find_member_by_email("alan@example.org")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_create_member_rejects_duplicate_email() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), Board).await;
        let actor = db.actor(board.id).await;

        let result = core
            .members()
            .create_member(&actor, NewMember::new("Copy", "Cat", board.email.clone()))
            .await;
        assert!(matches!(result, Err(AdminError::Validation(_))));
    }

    // ==================== Status Flags ====================

    #[tokio::test]
    async fn test_ban_requires_board_and_not_self() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let leader = MemberFactory::seed(db.db(), GroupLeader).await;
        let board = MemberFactory::seed(db.db(), Board).await;
        let target = MemberFactory::seed(db.db(), Member).await;

        let leader_actor = db.actor(leader.id).await;
        let denied = core.members().set_banned(&leader_actor, target.id, true).await;
        assert!(matches!(denied, Err(AdminError::AuthorizationDenied(_))));

        let board_actor = db.actor(board.id).await;
        let own = core.members().set_banned(&board_actor, board.id, true).await;
        assert!(matches!(own, Err(AdminError::Validation(_))));

        core.members()
            .set_banned(&board_actor, target.id, true)
            .await
            .unwrap();
        assert!(db.db().find_member(target.id).await.unwrap().unwrap().is_banned);

        // The banned member loses every capability
        assert_eq!(db.actor(target.id).await.privilege, None);
    }

    #[tokio::test]
    async fn test_membership_status_toggle() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), Board).await;
        let target = MemberFactory::seed(db.db(), Member).await;
        let actor = db.actor(board.id).await;

        core.members()
            .set_membership_active(&actor, target.id, false)
            .await
            .unwrap();
        let stored = db.db().find_member(target.id).await.unwrap().unwrap();
        assert!(!stored.is_membership_active);

        let missing = core
            .members()
            .set_membership_active(&actor, Uuid::new_v4(), true)
            .await;
        assert!(matches!(missing, Err(AdminError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_password_reset_requires_it() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), Board).await;
        let it = MemberFactory::seed(db.db(), It).await;
        let target = MemberFactory::seed(db.db(), Member).await;

        let board_actor = db.actor(board.id).await;
        let denied = core
            .members()
            .request_password_reset(&board_actor, target.id)
            .await;
        assert!(matches!(denied, Err(AdminError::AuthorizationDenied(_))));

        let it_actor = db.actor(it.id).await;
        core.members()
            .request_password_reset(&it_actor, target.id)
            .await
            .unwrap();
        let stored = db.db().find_member(target.id).await.unwrap().unwrap();
        assert!(stored.password_set_at.is_none());
    }

    #[tokio::test]
    async fn test_delete_member() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), Volunteer).await;
        let board = MemberFactory::seed(db.db(), Board).await;
        let target = MemberFactory::seed(db.db(), Member).await;

        let volunteer_actor = db.actor(volunteer.id).await;
        let denied = core.members().delete_member(&volunteer_actor, target.id).await;
        assert!(matches!(denied, Err(AdminError::AuthorizationDenied(_))));

        let board_actor = db.actor(board.id).await;
        let own = core.members().delete_member(&board_actor, board.id).await;
        assert!(matches!(own, Err(AdminError::Validation(_))));

        core.members()
            .delete_member(&board_actor, target.id)
            .await
            .unwrap();
        assert!(db.db().find_member(target.id).await.unwrap().is_none());

        let again = core.members().delete_member(&board_actor, target.id).await;
        assert!(matches!(again, Err(AdminError::NotFound(_))));
    }

    // ==================== Reads ====================

    #[tokio::test]
    async fn test_member_reads() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let member = MemberFactory::seed(db.db(), Member).await;
        let volunteer = MemberFactory::seed(db.db(), Volunteer).await;

        let member_actor = db.actor(member.id).await;
        assert_eq!(
            core.members().get_member(&member_actor, member.id).await.unwrap().id,
            member.id
        );
        assert!(matches!(
            core.members().get_member(&member_actor, volunteer.id).await,
            Err(AdminError::AuthorizationDenied(_))
        ));
        assert!(core.members().list_members(&member_actor).await.is_err());

        let volunteer_actor = db.actor(volunteer.id).await;
        let all = core.members().list_members(&volunteer_actor).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_banned_member_cannot_read_own_record() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let banned = MemberFactory::seed_banned(db.db(), Member).await;

        let actor = db.actor(banned.id).await;
        assert!(matches!(
            core.members().get_member(&actor, banned.id).await,
            Err(AdminError::AuthorizationDenied(_))
        ));
    }
}
