use crate::core::models::{PrintJob, PrintSubject, PrintTicket};
use crate::core::print_queue::PrintQueueStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, print_queue};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a pending print job
    pub async fn create_print_job(
        &self,
        subject: &PrintSubject,
        ref_invoker: Uuid,
    ) -> Result<PrintJob> {
        debug!(
            "Queueing card for member {} (invoker {})",
            subject.member_ref, ref_invoker
        );

        let active_model = print_queue::ActiveModel {
            firstname: Set(subject.firstname.clone()),
            lastname: Set(subject.lastname.clone()),
            email: Set(subject.email.clone()),
            member_ref: Set(subject.member_ref),
            ref_invoker: Set(ref_invoker),
            is_voluntary: Set(subject.is_voluntary),
            completed: Set(false),
            error_msg: Set(None),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(model.to_domain_job())
    }

    /// Read the row a ticket points at
    ///
    /// The row is matched on all three of queue id, member and invoker.
    pub async fn find_print_job(&self, ticket: &PrintTicket) -> Result<Option<PrintJob>> {
        let model = entities::PrintQueue::find_by_id(ticket.queue_id)
            .filter(print_queue::Column::MemberRef.eq(ticket.member_ref))
            .filter(print_queue::Column::RefInvoker.eq(ticket.ref_invoker))
            .one(&self.db)
            .await?;

        Ok(model.map(|model| model.to_domain_job()))
    }
}

#[async_trait]
impl PrintQueueStore for SeaOrmDatabase {
    async fn insert_print_job(
        &self,
        subject: &PrintSubject,
        ref_invoker: Uuid,
    ) -> Result<PrintJob> {
        self.create_print_job(subject, ref_invoker).await
    }

    async fn fetch_print_job(&self, ticket: &PrintTicket) -> Result<Option<PrintJob>> {
        self.find_print_job(ticket).await
    }
}
