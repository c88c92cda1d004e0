//! # member-admin
//!
//! Administrative core for a membership organization.
//!
//! ## Features
//!
//! - **Privilege lattice**: five ordered levels with pure capability predicates
//! - **Authorized mutations**: every service call takes an explicit actor and
//!   is checked before the store is touched
//! - **Audit log**: one entry per successful administrative change
//! - **Print queue handoff**: enqueue a membership card and watch the row
//!   until the print worker reports back or the deadline passes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use member_admin::{AdminCore, Config};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/member-admin.yaml").await?;
//!     let core = AdminCore::new(config).await?;
//!
//!     let actor = core.actor(Uuid::new_v4()).await?;
//!     let ticket = core.print_membership_card(&actor, Uuid::new_v4()).await?;
//!
//!     let timeout = core.print_queue().timeout();
//!     let outcome = core
//!         .print_queue()
//!         .watch(ticket, timeout, Default::default())
//!         .await;
//!     println!("Print job {}: {:?}", ticket.queue_id, outcome);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{ActorContext, Capability, PrivilegeLevel};
pub use config::Config;
pub use core::AdminCore;
pub use core::models::{
    Application, ApplicationStatus, AuditAction, AuditEntry, BulkReport, Member, NewMember,
    PrintJob, PrintSubject, PrintTicket,
};
pub use core::print_queue::{
    PrintJobObserver, PrintQueue, PrintQueueStore, WatchHandle, WatchOutcome,
};
pub use storage::Database;
pub use utils::error::{AdminError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUSTC_VERSION").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
