use tracing::{info, warn};

use crate::application::roster::RosterController;
use crate::domain::id::StudentId;
use crate::domain::student::Student;
use crate::error::Result;
use crate::port::inbound::view::{Confirm, RosterView};
use crate::port::outbound::store::StudentStore;

/// Question asked before a delete goes ahead.
pub const DELETE_QUESTION: &str = "Are you sure you want to delete this student record?";

/// Acknowledgment shown after a confirmed delete.
pub const DELETE_ACKNOWLEDGMENT: &str = "Student record deleted successfully";

/// Delete form for the selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteForm {
    id: StudentId,
}

/// Result of submitting a [`DeleteForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent to storage.
    Cancelled,
    /// Confirmed, but no row had the id.
    Missing,
}

impl DeleteForm {
    #[must_use]
    pub fn new(id: StudentId) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn from_selection(student: &Student) -> Self {
        Self::new(student.id)
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Ask for confirmation, delete, and reload the roster into `view`.
    ///
    /// A declined confirmation returns before storage or the view is
    /// touched.
    ///
    /// # Errors
    /// Returns an error if the confirmation, the delete or the reload fails.
    pub fn submit<S: StudentStore>(
        self,
        controller: &RosterController<S>,
        confirm: &mut dyn Confirm,
        view: &mut dyn RosterView,
    ) -> Result<DeleteOutcome> {
        if !confirm.confirm(DELETE_QUESTION)? {
            return Ok(DeleteOutcome::Cancelled);
        }

        let outcome = if controller.store().delete(self.id)? {
            info!(id = %self.id, "Student deleted");
            DeleteOutcome::Deleted
        } else {
            warn!(id = %self.id, "Delete matched no student");
            DeleteOutcome::Missing
        };
        controller.reload(view)?;
        Ok(outcome)
    }
}
