//! Membership-card print queue handoff
//!
//! A print job is a row in `printer_queue`. [`PrintQueue::enqueue`] inserts it
//! and returns a [`PrintTicket`]; [`PrintQueue::watch`] then reads the row on
//! an interval until the external print worker marks it completed or failed,
//! or until the deadline passes.

mod queue;
mod store;
mod watcher;

pub use queue::PrintQueue;
#[cfg(test)]
pub use store::MockPrintQueueStore;
pub use store::PrintQueueStore;
pub use watcher::{PrintJobObserver, WatchHandle, WatchOutcome};
