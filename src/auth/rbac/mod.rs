//! Privilege lattice
//!
//! A strict total order over five privilege levels and the capability
//! predicates derived from it. Every predicate is pure and takes the actor's
//! level as an `Option`: a missing level denies everything.

mod permissions;
mod types;

pub use permissions::*;
pub use types::{Capability, PrivilegeLevel};
