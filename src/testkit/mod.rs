//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for students and rosters.
//! - [`store`]: Controllers over the in-memory store.
//! - [`view`]: A [`RosterView`](crate::port::inbound::view::RosterView)
//!   that records every refresh.
//! - [`config`]: Canonical test configurations.

pub mod config;
pub mod domain;
pub mod store;
pub mod view;
