//! Application services (use cases).
//!
//! The roster controller loads the roster; each form collects input,
//! issues one store call and asks the view it was given to reload.

pub mod form;
pub mod roster;
