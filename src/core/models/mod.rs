//! Core data models
//!
//! Explicit row shapes for everything the admin core reads from or writes to
//! the store. Conversion from database rows happens in the storage layer.

pub mod application;
pub mod audit;
pub mod member;
pub mod print_job;

// Re-export commonly used types
pub use crate::auth::rbac::PrivilegeLevel;
pub use application::*;
pub use audit::*;
pub use member::*;
pub use print_job::*;
