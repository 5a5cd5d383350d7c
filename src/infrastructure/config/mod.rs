//! Infrastructure configuration modules.

pub mod logging;
pub mod roster;
pub mod settings;
