//! Course options offered when adding or editing a student.
//!
//! Storage keeps `course` as free text. The list here only constrains what
//! the front end lets a user pick, mirroring a fixed drop-down.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Courses offered when no list is configured.
pub const DEFAULT_COURSES: [&str; 4] = ["Math", "Biology", "Astronomy", "Physics"];

/// Ordered list of selectable courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseList(Vec<String>);

impl CourseList {
    /// Create a course list from the given names, keeping their order.
    pub fn new<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(courses.into_iter().map(Into::into).collect())
    }

    /// All courses in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The preselected course: the first entry.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Position of `course` in the list, if offered.
    #[must_use]
    pub fn position(&self, course: &str) -> Option<usize> {
        self.0.iter().position(|c| c == course)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Map user input onto an offered course.
    ///
    /// An exact match wins; otherwise a case-insensitive match returns the
    /// list's own spelling.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownCourse`] if nothing matches.
    pub fn resolve(&self, input: &str) -> Result<String, DomainError> {
        let input = input.trim();
        if let Some(exact) = self.0.iter().find(|c| c.as_str() == input) {
            return Ok(exact.clone());
        }
        self.0
            .iter()
            .find(|c| c.eq_ignore_ascii_case(input))
            .cloned()
            .ok_or_else(|| DomainError::UnknownCourse {
                course: input.to_string(),
                allowed: self.0.clone(),
            })
    }
}

impl Default for CourseList {
    fn default() -> Self {
        Self::new(DEFAULT_COURSES)
    }
}
