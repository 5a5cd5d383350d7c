//! Student records.

use serde::{Deserialize, Serialize};

use super::id::StudentId;

/// Editable fields of a student record.
///
/// This is what the add and edit forms submit. Nothing is validated: a blank
/// name or an oddly formatted mobile number is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDetails {
    pub name: String,
    pub course: String,
    pub mobile: String,
}

impl StudentDetails {
    pub fn new(
        name: impl Into<String>,
        course: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            mobile: mobile.into(),
        }
    }
}

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(flatten)]
    pub details: StudentDetails,
}

impl Student {
    #[must_use]
    pub fn new(id: StudentId, details: StudentDetails) -> Self {
        Self { id, details }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.details.name
    }

    #[must_use]
    pub fn course(&self) -> &str {
        &self.details.course
    }

    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.details.mobile
    }
}
