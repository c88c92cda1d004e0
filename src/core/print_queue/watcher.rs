use super::queue::PrintQueue;
use crate::core::models::{PrintJobState, PrintTicket};
use crate::utils::error::{AdminError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

/// How a watch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The worker set `completed`
    Completed,
    /// The worker set `error_msg`
    Failed(String),
    /// Neither happened before the deadline
    TimedOut,
    /// The watch was torn down by its owner
    Cancelled,
}

impl WatchOutcome {
    /// `Ok(true)` once printed, `Ok(false)` if the watch was cancelled
    pub fn into_result(self, ticket: &PrintTicket, timeout: Duration) -> Result<bool> {
        match self {
            WatchOutcome::Completed => Ok(true),
            WatchOutcome::Cancelled => Ok(false),
            WatchOutcome::Failed(message) => Err(AdminError::QueueFailed {
                queue_id: ticket.queue_id,
                message,
            }),
            WatchOutcome::TimedOut => Err(AdminError::QueueTimeout {
                queue_id: ticket.queue_id,
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}

/// Callbacks for [`PrintQueue::spawn_watch`]; at most one is invoked per watch
pub trait PrintJobObserver: Send + Sync {
    fn on_completed(&self, ticket: &PrintTicket);
    fn on_error(&self, ticket: &PrintTicket, message: &str);
    fn on_timeout(&self, ticket: &PrintTicket);
}

/// Handle to a spawned watch
///
/// Dropping the handle cancels the watch.
pub struct WatchHandle {
    ticket: PrintTicket,
    cancel: CancellationToken,
    _guard: DropGuard,
    task: JoinHandle<WatchOutcome>,
}

impl WatchHandle {
    pub fn ticket(&self) -> &PrintTicket {
        &self.ticket
    }

    /// Stop watching; no callback fires afterwards
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the watch to end
    pub async fn join(self) -> WatchOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Watch task for job {} ended abnormally: {}", self.ticket.queue_id, e);
                WatchOutcome::Cancelled
            }
        }
    }
}

impl PrintQueue {
    /// Read the ticket's row every poll interval until it reaches a terminal
    /// state, `timeout` elapses or `cancel` fires, whichever comes first.
    ///
    /// Read failures and a row that is not visible do not end the watch.
    pub async fn watch(
        &self,
        ticket: PrintTicket,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> WatchOutcome {
        let deadline = sleep(timeout);
        tokio::pin!(deadline);

        let period = self.config.poll_interval().max(Duration::from_millis(1));
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut polls: u32 = 0;
        loop {
            let read = async {
                ticker.tick().await;
                self.store.fetch_print_job(&ticket).await
            };

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Watch of print job {} cancelled", ticket.queue_id);
                    return WatchOutcome::Cancelled;
                }
                _ = &mut deadline => {
                    warn!(
                        "Print job {} timed out after {:?} ({} reads)",
                        ticket.queue_id, timeout, polls
                    );
                    return WatchOutcome::TimedOut;
                }
                result = read => {
                    polls += 1;
                    match result {
                        Ok(Some(job)) => match job.state() {
                            PrintJobState::Pending => {
                                debug!("Print job {} still pending", ticket.queue_id);
                            }
                            PrintJobState::Completed => {
                                info!("Print job {} completed", ticket.queue_id);
                                return WatchOutcome::Completed;
                            }
                            PrintJobState::Failed(message) => {
                                if job.has_conflicting_terminal_state() {
                                    warn!(
                                        "Print job {} is both completed and failed, \
                                         reporting the error",
                                        ticket.queue_id
                                    );
                                }
                                info!("Print job {} failed: {}", ticket.queue_id, message);
                                return WatchOutcome::Failed(message);
                            }
                        },
                        Ok(None) => {
                            debug!("Print job {} not visible", ticket.queue_id);
                        }
                        Err(e) => {
                            warn!("Failed to read print job {}: {}", ticket.queue_id, e);
                        }
                    }
                }
            }
        }
    }

    /// Watch in the background and report through `observer`
    pub fn spawn_watch(
        &self,
        ticket: PrintTicket,
        timeout: Duration,
        observer: Arc<dyn PrintJobObserver>,
    ) -> WatchHandle {
        let cancel = CancellationToken::new();
        let queue = self.clone();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let outcome = queue.watch(ticket, timeout, token.clone()).await;
            if token.is_cancelled() {
                return WatchOutcome::Cancelled;
            }

            match &outcome {
                WatchOutcome::Completed => observer.on_completed(&ticket),
                WatchOutcome::Failed(message) => observer.on_error(&ticket, message),
                WatchOutcome::TimedOut => observer.on_timeout(&ticket),
                WatchOutcome::Cancelled => {}
            }
            outcome
        });

        WatchHandle {
            ticket,
            _guard: cancel.clone().drop_guard(),
            cancel,
            task,
        }
    }
}
