//! Print queue handoff tests
//!
//! The external print worker is played by updating `printer_queue` rows
//! directly.

#[cfg(test)]
mod tests {
    use crate::common::{MemberFactory, TestDatabase};
    use member_admin::config::PrintQueueConfig;
    use member_admin::{
        AdminError, AuditAction, PrintJobObserver, PrintTicket, PrivilegeLevel, WatchOutcome,
    };
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;
    use uuid::Uuid;

    #[derive(Default)]
    struct Events(Mutex<Vec<String>>);

    impl PrintJobObserver for Events {
        fn on_completed(&self, ticket: &PrintTicket) {
            self.0.lock().unwrap().push(format!("completed {}", ticket.queue_id));
        }

        fn on_error(&self, _ticket: &PrintTicket, message: &str) {
            self.0.lock().unwrap().push(format!("error {}", message));
        }

        fn on_timeout(&self, _ticket: &PrintTicket) {
            self.0.lock().unwrap().push("timeout".to_string());
        }
    }

    #[tokio::test]
    async fn test_card_for_volunteer_uses_volunteer_template() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let board = MemberFactory::seed(db.db(), PrivilegeLevel::Board).await;
        let member = MemberFactory::seed(db.db(), PrivilegeLevel::Member).await;
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let actor = db.actor(board.id).await;

        let member_ticket = core.print_membership_card(&actor, member.id).await.unwrap();
        let volunteer_ticket = core
            .print_membership_card(&actor, volunteer.id)
            .await
            .unwrap();

        let member_job = db.db().find_print_job(&member_ticket).await.unwrap().unwrap();
        let volunteer_job = db
            .db()
            .find_print_job(&volunteer_ticket)
            .await
            .unwrap()
            .unwrap();

        assert!(!member_job.is_voluntary);
        assert!(volunteer_job.is_voluntary);
        assert_eq!(member_job.ref_invoker, board.id);
        assert_eq!(member_job.member_ref, member.id);
        assert!(!member_job.completed);
        assert!(member_job.error_msg.is_none());

        let entries = core.audit().list(&actor, 10).await.unwrap();
        assert!(entries.iter().all(|e| e.action == AuditAction::PrintCardQueued));
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_print_card_authorization() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let member = MemberFactory::seed(db.db(), PrivilegeLevel::Member).await;
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;

        let member_actor = db.actor(member.id).await;
        assert!(matches!(
            core.print_membership_card(&member_actor, member.id).await,
            Err(AdminError::AuthorizationDenied(_))
        ));

        let volunteer_actor = db.actor(volunteer.id).await;
        assert!(matches!(
            core.print_membership_card(&volunteer_actor, Uuid::new_v4()).await,
            Err(AdminError::NotFound(_))
        ));
        assert_eq!(db.db().stats().await.unwrap().pending_print_jobs, 0);
    }

    #[tokio::test]
    async fn test_watch_sees_worker_completion() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let actor = db.actor(volunteer.id).await;
        let ticket = core.print_membership_card(&actor, volunteer.id).await.unwrap();

        let worker = db.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            worker.complete_print_job(ticket.queue_id).await;
        });

        let timeout = core.print_queue().timeout();
        let outcome = core
            .print_queue()
            .watch(ticket, timeout, CancellationToken::new())
            .await;
        assert_eq!(outcome, WatchOutcome::Completed);
    }

    #[tokio::test]
    async fn test_watch_reports_worker_error() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let actor = db.actor(volunteer.id).await;
        let ticket = core.print_membership_card(&actor, volunteer.id).await.unwrap();

        db.fail_print_job(ticket.queue_id, "printer offline").await;

        let events = Arc::new(Events::default());
        let handle = core
            .print_queue()
            .spawn_watch(ticket, core.print_queue().timeout(), events.clone());

        assert_eq!(
            handle.join().await,
            WatchOutcome::Failed("printer offline".to_string())
        );
        assert_eq!(
            *events.0.lock().unwrap(),
            vec!["error printer offline".to_string()]
        );
    }

    #[tokio::test]
    async fn test_watch_times_out_then_ignores_late_update() {
        let db = TestDatabase::new().await;
        let core = db.core_with_print_queue(PrintQueueConfig {
            timeout_ms: 200,
            poll_interval_ms: 20,
        });
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let actor = db.actor(volunteer.id).await;
        let ticket = core.print_membership_card(&actor, volunteer.id).await.unwrap();

        let events = Arc::new(Events::default());
        let timeout = core.print_queue().timeout();
        let handle = core.print_queue().spawn_watch(ticket, timeout, events.clone());

        let outcome = handle.join().await;
        assert_eq!(outcome, WatchOutcome::TimedOut);

        db.complete_print_job(ticket.queue_id).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*events.0.lock().unwrap(), vec!["timeout".to_string()]);

        let error = outcome.into_result(&ticket, timeout).unwrap_err();
        assert!(error.user_message().contains("Check the printer"));
    }

    #[tokio::test]
    async fn test_independent_watchers_for_same_member() {
        let db = TestDatabase::new().await;
        let core = db.core();
        let volunteer = MemberFactory::seed(db.db(), PrivilegeLevel::Volunteer).await;
        let actor = db.actor(volunteer.id).await;

        let first = core.print_membership_card(&actor, volunteer.id).await.unwrap();
        let second = core.print_membership_card(&actor, volunteer.id).await.unwrap();
        assert_ne!(first.queue_id, second.queue_id);

        db.complete_print_job(first.queue_id).await;
        db.fail_print_job(second.queue_id, "out of cards").await;

        let timeout = core.print_queue().timeout();
        let (a, b) = tokio::join!(
            core.print_queue().watch(first, timeout, CancellationToken::new()),
            core.print_queue().watch(second, timeout, CancellationToken::new()),
        );
        assert_eq!(a, WatchOutcome::Completed);
        assert_eq!(b, WatchOutcome::Failed("out of cards".to_string()));
    }
}
