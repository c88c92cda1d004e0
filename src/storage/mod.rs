//! Storage layer for the admin core
//!
//! This module provides data persistence over SeaORM.

/// Database storage module
pub mod database;

pub use database::Database;
