//! CLI module graph.

pub mod about;
pub mod add;
pub mod command;
pub mod config;
pub mod delete;
pub mod diagnostic;
pub mod dispatch;
pub mod edit;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod roster;
pub mod search;
