//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`StudentStore`](crate::port::outbound::store::StudentStore)
//! using Diesel ORM.

pub mod database;
pub mod store;
