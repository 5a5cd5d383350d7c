//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!   RosterView ◄──┤   Application (forms)   ├──► StudentStore
//!   Confirm    ◄──┤                         │
//!                 └─────────────────────────┘
//!        ▲                                            ▲
//!        │                                            │
//!   ┌─────────┐                               ┌──────────────┐
//!   │   CLI   │                               │ SQLite/Memory│
//!   │ Adapter │                               │   Adapters   │
//!   └─────────┘                               └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`StudentStore`](outbound::store::StudentStore) - Persistence for student records
//! - [`RosterView`](inbound::view::RosterView) - Receives the roster after every reload
//! - [`Confirm`](inbound::view::Confirm) - Answers yes/no questions before destructive actions

pub mod inbound;
pub mod outbound;
