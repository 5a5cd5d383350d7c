//! Roster loading and row selection.

use tracing::debug;

use crate::domain::id::StudentId;
use crate::domain::roster::Roster;
use crate::domain::student::Student;
use crate::error::{Error, Result};
use crate::port::inbound::view::RosterView;
use crate::port::outbound::store::StudentStore;

/// Owns the store handle that forms submit through.
///
/// The controller is what a view's owner passes around instead of a shared
/// window reference: forms call back into it to reload.
#[derive(Debug)]
pub struct RosterController<S> {
    store: S,
}

impl<S: StudentStore> RosterController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build a roster from a full, unfiltered load of storage.
    ///
    /// # Errors
    /// Returns an error if storage cannot be read.
    pub fn load(&self) -> Result<Roster> {
        let roster = Roster::new(self.store.list()?);
        debug!(rows = roster.len(), "Roster loaded");
        Ok(roster)
    }

    /// Load the roster and hand it to `view`.
    ///
    /// # Errors
    /// Returns an error if storage cannot be read; the view is left as is.
    pub fn reload(&self, view: &mut dyn RosterView) -> Result<()> {
        let roster = self.load()?;
        view.refresh(roster);
        Ok(())
    }

    /// Select the row with `id` from a fresh load.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no row has that id.
    pub fn select(&self, id: StudentId) -> Result<Student> {
        self.load()?
            .row_by_id(id)
            .cloned()
            .ok_or(Error::NotFound { id })
    }
}
