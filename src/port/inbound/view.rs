//! Front-end hooks handed to forms.
//!
//! Forms never reach for a shared window; whoever opens a form passes in the
//! view to reload and, for deletes, something that can ask for confirmation.

use crate::domain::roster::Roster;

/// Receives the roster after each reload.
pub trait RosterView {
    /// Replace whatever is shown with `roster`.
    fn refresh(&mut self, roster: Roster);
}

impl<F: FnMut(Roster)> RosterView for F {
    fn refresh(&mut self, roster: Roster) {
        self(roster);
    }
}

/// Answers a yes/no question.
pub trait Confirm {
    /// Ask `question`; `true` means go ahead.
    ///
    /// # Errors
    /// Returns an error if the answer could not be read.
    fn confirm(&mut self, question: &str) -> crate::error::Result<bool>;
}

/// A fixed answer, for pre-confirmed or scripted runs.
impl Confirm for bool {
    fn confirm(&mut self, _question: &str) -> crate::error::Result<bool> {
        Ok(*self)
    }
}
