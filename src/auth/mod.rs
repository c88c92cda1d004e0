//! Authorization for administrative actions
//!
//! Every mutation takes an explicit [`ActorContext`]; the privilege lattice in
//! [`rbac`] decides what that actor may do.

pub mod context;
pub mod rbac;


pub use context::ActorContext;
pub use rbac::{Capability, PrivilegeLevel};
