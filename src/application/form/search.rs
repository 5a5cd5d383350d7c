use tracing::debug;

use crate::application::roster::RosterController;
use crate::domain::roster::{Highlight, Roster};
use crate::domain::student::Student;
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

/// Search-by-name form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name: String,
}

/// What a search found and which cells of the shown roster it marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matches: Vec<Student>,
    pub highlight: Highlight,
}

impl SearchForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Look the name up in storage and mark the matching rows of `roster`.
    ///
    /// Matching is exact and case-sensitive. Storage is not modified and the
    /// roster is not reloaded.
    ///
    /// # Errors
    /// Returns an error if the lookup fails.
    pub fn submit<S: StudentStore>(
        self,
        controller: &RosterController<S>,
        roster: &Roster,
    ) -> Result<SearchOutcome> {
        let matches = controller.store().find_by_name(&self.name)?;
        let highlight = roster.highlight_rows(&matches);
        debug!(
            name = %self.name,
            matches = matches.len(),
            highlighted = highlight.len(),
            "Search complete"
        );
        Ok(SearchOutcome { matches, highlight })
    }
}
