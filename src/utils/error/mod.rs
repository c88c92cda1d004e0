//! Error handling for the admin core
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod response;
mod types;

pub use response::ErrorCategory;
pub use types::{AdminError, Result};
