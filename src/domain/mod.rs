//! Storage-agnostic domain types.

pub mod course;
pub mod error;
pub mod id;
pub mod roster;
pub mod student;
