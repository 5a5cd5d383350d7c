//! Rollcall - a student roster backed by a local SQLite database.
//!
//! Each student record holds an id, a name, a course and a mobile number.
//! The roster is the full table as last loaded from storage; it is rebuilt
//! after every add, edit or delete so it always mirrors what is stored.
//!
//! # Architecture
//!
//! The crate is laid out hexagonally:
//!
//! - **`domain`** - Students, course lists, the roster view model and search
//!   highlighting. No I/O.
//! - **`port`** - The `StudentStore` persistence trait and the `RosterView`
//!   and `Confirm` hooks handed to forms.
//! - **`application`** - The roster controller and the add, search, edit and
//!   delete forms. Each form issues one store call, then reloads the view it
//!   was given.
//! - **`adapter`** - SQLite (Diesel) and in-memory stores; the command-line
//!   front end.
//! - **`infrastructure`** - Configuration, logging and wiring.
//!
//! # Example
//!
//! ```no_run
//! use rollcall::application::form::add::AddForm;
//! use rollcall::domain::course::CourseList;
//! use rollcall::domain::roster::Roster;
//! use rollcall::infrastructure::bootstrap::open_roster;
//!
//! fn main() -> rollcall::error::Result<()> {
//!     let controller = open_roster("database.db")?;
//!     let mut form = AddForm::new(&CourseList::default());
//!     form.details.name = "Ann".into();
//!     form.submit(&controller, &mut |roster: Roster| {
//!         println!("{} students", roster.len());
//!     })?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
