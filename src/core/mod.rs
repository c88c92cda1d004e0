//! Core functionality for the admin core
//!
//! Services in this module authorize every call through an explicit
//! [`ActorContext`] before touching the store.

pub mod applications;
pub mod audit;
pub mod members;
pub mod models;
pub mod print_queue;

use crate::auth::{ActorContext, Capability};
use crate::config::Config;
use crate::core::models::{AuditAction, PrintTicket};
use crate::storage::Database;
use crate::utils::error::{AdminError, Result};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use applications::ApplicationService;
use audit::AuditLog;
use members::MemberService;
use print_queue::PrintQueue;

/// Entry point that wires the services to one database
#[derive(Clone)]
pub struct AdminCore {
    config: Arc<Config>,
    db: Arc<Database>,
    members: MemberService,
    applications: ApplicationService,
    audit: AuditLog,
    print_queue: PrintQueue,
}

impl AdminCore {
    /// Connect to the configured database and apply pending migrations
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!("Starting admin core v{}", crate::VERSION);

        let db = Database::new(config.database()).await?;
        db.migrate().await?;

        Ok(Self::with_database(config, Arc::new(db)))
    }

    /// Build the services on an existing connection
    pub fn with_database(config: Config, db: Arc<Database>) -> Self {
        let audit = AuditLog::new(db.clone());
        let members = MemberService::new(db.clone(), audit.clone());
        let applications = ApplicationService::new(db.clone(), audit.clone());
        let print_queue = PrintQueue::new(db.clone(), config.print_queue().clone());

        Self {
            config: Arc::new(config),
            db,
            members,
            applications,
            audit,
            print_queue,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn members(&self) -> &MemberService {
        &self.members
    }

    pub fn applications(&self) -> &ApplicationService {
        &self.applications
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn print_queue(&self) -> &PrintQueue {
        &self.print_queue
    }

    /// Resolve the acting user from the members table
    pub async fn actor(&self, user_id: Uuid) -> Result<ActorContext> {
        ActorContext::resolve(&self.db, user_id).await
    }

    /// Queue a membership card for `member_id`
    ///
    /// The volunteer template is used when the member is Volunteer or above.
    pub async fn print_membership_card(
        &self,
        actor: &ActorContext,
        member_id: Uuid,
    ) -> Result<PrintTicket> {
        actor.require_capability(Capability::PrintCards)?;

        let member = self
            .db
            .find_member(member_id)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Member {}", member_id)))?;

        let ticket = self.print_queue.enqueue_member(actor, &member).await?;
        self.audit
            .record(
                actor,
                AuditAction::PrintCardQueued,
                Some(member_id.to_string()),
                Some(json!({ "queue_id": ticket.queue_id })),
            )
            .await;

        Ok(ticket)
    }
}
