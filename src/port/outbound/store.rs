//! Persistence port for student records.
//!
//! One method per statement. Implementations own their connection handling;
//! callers never see SQL.

use crate::domain::id::StudentId;
use crate::domain::student::{Student, StudentDetails};
use crate::error::Result;

/// Storage operations for student records.
pub trait StudentStore {
    /// Load every record, in whatever order storage returns them.
    fn list(&self) -> Result<Vec<Student>>;

    /// Insert a new record. The id is assigned by storage.
    fn insert(&self, details: &StudentDetails) -> Result<()>;

    /// Overwrite name, course and mobile of the record with `id`.
    ///
    /// Returns `false` if no record has that id.
    fn update(&self, id: StudentId, details: &StudentDetails) -> Result<bool>;

    /// Delete the record with `id`. Returns `false` if it did not exist.
    fn delete(&self, id: StudentId) -> Result<bool>;

    /// Records whose name equals `name` exactly (case-sensitive).
    fn find_by_name(&self, name: &str) -> Result<Vec<Student>>;
}

impl<S: StudentStore + ?Sized> StudentStore for &S {
    fn list(&self) -> Result<Vec<Student>> {
        (**self).list()
    }

    fn insert(&self, details: &StudentDetails) -> Result<()> {
        (**self).insert(details)
    }

    fn update(&self, id: StudentId, details: &StudentDetails) -> Result<bool> {
        (**self).update(id, details)
    }

    fn delete(&self, id: StudentId) -> Result<bool> {
        (**self).delete(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Student>> {
        (**self).find_by_name(name)
    }
}
