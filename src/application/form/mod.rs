//! Forms: one user interaction, one statement, one reload.
//!
//! Each form is built by the front end, filled in, and consumed by
//! `submit`. Nothing here validates field contents; a form stores exactly
//! what it was given.

pub mod add;
pub mod delete;
pub mod edit;
pub mod search;
