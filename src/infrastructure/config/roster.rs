//! Roster presentation configuration.

use serde::{Deserialize, Serialize};

use crate::domain::course::CourseList;

/// Settings for the add and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterConfig {
    /// Courses offered when adding or editing a student, in display order.
    /// The first entry is preselected.
    #[serde(default)]
    pub courses: CourseList,
}
