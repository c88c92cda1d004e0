//! Print queue entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity printed on a membership card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintSubject {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Member the card belongs to
    pub member_ref: Uuid,
    /// Selects the volunteer card template
    pub is_voluntary: bool,
}

/// Row of the `printer_queue` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub member_ref: Uuid,
    /// Actor who queued the job
    pub ref_invoker: Uuid,
    pub is_voluntary: bool,
    pub completed: bool,
    pub error_msg: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// State of a print job as reported by the print worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintJobState {
    Pending,
    Completed,
    Failed(String),
}

impl PrintJob {
    /// Current state; an error message wins over `completed`
    pub fn state(&self) -> PrintJobState {
        match (&self.error_msg, self.completed) {
            (Some(message), _) => PrintJobState::Failed(message.clone()),
            (None, true) => PrintJobState::Completed,
            (None, false) => PrintJobState::Pending,
        }
    }

    /// The worker is expected to set exactly one terminal field
    pub fn has_conflicting_terminal_state(&self) -> bool {
        self.completed && self.error_msg.is_some()
    }
}

/// Handle returned by a successful enqueue, identifying the row to watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintTicket {
    pub queue_id: i32,
    pub member_ref: Uuid,
    pub ref_invoker: Uuid,
}

impl From<&PrintJob> for PrintTicket {
    fn from(job: &PrintJob) -> Self {
        Self {
            queue_id: job.id,
            member_ref: job.member_ref,
            ref_invoker: job.ref_invoker,
        }
    }
}
