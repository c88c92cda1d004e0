use super::store::PrintQueueStore;
use crate::auth::rbac::is_voluntary_or_higher;
use crate::auth::{ActorContext, Capability};
use crate::config::PrintQueueConfig;
use crate::core::models::{Member, PrintSubject, PrintTicket};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Producer side of the print queue
#[derive(Clone)]
pub struct PrintQueue {
    pub(super) store: Arc<dyn PrintQueueStore>,
    pub(super) config: PrintQueueConfig,
}

impl PrintQueue {
    pub fn new(store: Arc<dyn PrintQueueStore>, config: PrintQueueConfig) -> Self {
        Self { store, config }
    }

    /// Configured deadline for a job to reach a terminal state
    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Insert a print job for `subject`, queued by `actor`
    ///
    /// Nothing is retried; an insert failure is returned as is.
    pub async fn enqueue(
        &self,
        actor: &ActorContext,
        subject: PrintSubject,
    ) -> Result<PrintTicket> {
        actor.require_capability(Capability::PrintCards)?;

        let job = self
            .store
            .insert_print_job(&subject, actor.user_id)
            .await
            .inspect_err(|e| {
                error!(
                    "Failed to queue card for member {}: {}",
                    subject.member_ref, e
                )
            })?;

        info!(
            "Queued print job {} for member {} (voluntary: {})",
            job.id, job.member_ref, job.is_voluntary
        );
        Ok(PrintTicket::from(&job))
    }

    /// Queue a membership card for `member`, picking the template from their level
    pub async fn enqueue_member(
        &self,
        actor: &ActorContext,
        member: &Member,
    ) -> Result<PrintTicket> {
        let subject = PrintSubject {
            firstname: member.firstname.clone(),
            lastname: member.lastname.clone(),
            email: member.email.clone(),
            member_ref: member.id,
            is_voluntary: is_voluntary_or_higher(Some(member.privilege)),
        };

        self.enqueue(actor, subject).await
    }
}
