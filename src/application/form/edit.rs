use tracing::{info, warn};

use crate::application::roster::RosterController;
use crate::domain::id::StudentId;
use crate::domain::student::{Student, StudentDetails};
use crate::error::Result;
use crate::port::inbound::view::RosterView;
use crate::port::outbound::store::StudentStore;

/// Edit form, pre-populated from the selected row.
///
/// The id is carried along but cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    id: StudentId,
    pub details: StudentDetails,
}

/// Result of submitting an [`EditForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// The row was gone by the time the update ran; nothing changed.
    Missing,
}

impl EditForm {
    #[must_use]
    pub fn from_selection(student: &Student) -> Self {
        Self {
            id: student.id,
            details: student.details.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Overwrite the record's fields and reload the roster into `view`.
    ///
    /// There is no check that the row still holds the values the form was
    /// filled from; the last writer wins.
    ///
    /// # Errors
    /// Returns an error if the update or the reload fails.
    pub fn submit<S: StudentStore>(
        self,
        controller: &RosterController<S>,
        view: &mut dyn RosterView,
    ) -> Result<EditOutcome> {
        let outcome = if controller.store().update(self.id, &self.details)? {
            info!(id = %self.id, "Student updated");
            EditOutcome::Updated
        } else {
            warn!(id = %self.id, "Update matched no student");
            EditOutcome::Missing
        };
        controller.reload(view)?;
        Ok(outcome)
    }
}
