//! Domain validation errors.
//!
//! The data layer accepts any text for a student's fields; the only rule
//! checked before a statement is issued is the course list offered by the
//! front end.
//!
//! # Examples
//!
//! ```
//! use rollcall::domain::course::CourseList;
//! use rollcall::domain::error::DomainError;
//!
//! let courses = CourseList::default();
//! let result = courses.resolve("Chemistry");
//!
//! assert!(matches!(result, Err(DomainError::UnknownCourse { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when a front-end constraint is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The course is not one of the offered options.
    #[error("unknown course '{course}' (expected one of: {})", allowed.join(", "))]
    UnknownCourse {
        /// The course that was supplied.
        course: String,
        /// The courses that are offered.
        allowed: Vec<String>,
    },
}
