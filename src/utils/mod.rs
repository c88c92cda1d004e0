//! Utility modules for the admin core
//!
//! - **error**: Error taxonomy and user-facing rendering
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use error::{AdminError, ErrorCategory, Result};
pub use logging::init_logging;
