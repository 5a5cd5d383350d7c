use tracing::info;

use crate::application::roster::RosterController;
use crate::domain::course::CourseList;
use crate::domain::student::StudentDetails;
use crate::error::Result;
use crate::port::inbound::view::RosterView;
use crate::port::outbound::store::StudentStore;

/// Add-student form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub details: StudentDetails,
}

impl AddForm {
    /// Blank form with the first offered course preselected.
    #[must_use]
    pub fn new(courses: &CourseList) -> Self {
        Self {
            details: StudentDetails {
                course: courses.first().unwrap_or_default().to_string(),
                ..StudentDetails::default()
            },
        }
    }

    /// Insert the record and reload the roster into `view`.
    ///
    /// # Errors
    /// Returns an error if the insert or the reload fails.
    pub fn submit<S: StudentStore>(
        self,
        controller: &RosterController<S>,
        view: &mut dyn RosterView,
    ) -> Result<()> {
        controller.store().insert(&self.details)?;
        info!(
            name = %self.details.name,
            course = %self.details.course,
            "Student added"
        );
        controller.reload(view)
    }
}
