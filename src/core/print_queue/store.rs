//! Storage seam for the print queue

use crate::core::models::{PrintJob, PrintSubject, PrintTicket};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Row access needed by the print queue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintQueueStore: Send + Sync {
    /// Insert a pending job queued by `ref_invoker`
    async fn insert_print_job(&self, subject: &PrintSubject, ref_invoker: Uuid) -> Result<PrintJob>;

    /// Read the job identified by `ticket`, if it is visible
    async fn fetch_print_job(&self, ticket: &PrintTicket) -> Result<Option<PrintJob>>;
}
