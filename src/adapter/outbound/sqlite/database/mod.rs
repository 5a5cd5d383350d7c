//! SQLite database modules.
//!
//! Provides connection management, schema definitions, and Diesel model
//! types for SQLite persistence.

pub mod connection;
pub mod model;
pub mod schema;
