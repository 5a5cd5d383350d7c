//! In-memory store implementation for testing.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::id::StudentId;
use crate::domain::student::{Student, StudentDetails};
use crate::error::Result;
use crate::port::outbound::store::StudentStore;

/// In-memory student store.
///
/// Assigns ids the way a SQLite `INTEGER PRIMARY KEY` does without
/// `AUTOINCREMENT`: one past the largest id currently stored.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    students: RwLock<BTreeMap<StudentId, StudentDetails>>,
}

impl MemoryStudentStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `students`, ids assigned in order.
    pub fn with_students<I>(students: I) -> Self
    where
        I: IntoIterator<Item = StudentDetails>,
    {
        let store = Self::new();
        {
            let mut map = store.students.write();
            for details in students {
                let id = next_id(&map);
                map.insert(id, details);
            }
        }
        store
    }
}

/// Once the largest id is `i64::MAX`, SQLite picks an unused rowid instead;
/// this takes the lowest free one.
fn next_id(map: &BTreeMap<StudentId, StudentDetails>) -> StudentId {
    match map.keys().next_back() {
        None => StudentId::new(1),
        Some(last) => match last.get().checked_add(1) {
            Some(next) => StudentId::new(next),
            None => (1..)
                .map(StudentId::new)
                .find(|id| !map.contains_key(id))
                .unwrap_or(*last),
        },
    }
}

impl StudentStore for MemoryStudentStore {
    fn list(&self) -> Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .iter()
            .map(|(id, details)| Student::new(*id, details.clone()))
            .collect())
    }

    fn insert(&self, details: &StudentDetails) -> Result<()> {
        let mut map = self.students.write();
        let id = next_id(&map);
        map.insert(id, details.clone());
        Ok(())
    }

    fn update(&self, id: StudentId, details: &StudentDetails) -> Result<bool> {
        Ok(self
            .students
            .write()
            .get_mut(&id)
            .map(|current| *current = details.clone())
            .is_some())
    }

    fn delete(&self, id: StudentId) -> Result<bool> {
        Ok(self.students.write().remove(&id).is_some())
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Student>> {
        Ok(self
            .students
            .read()
            .iter()
            .filter(|(_, details)| details.name == name)
            .map(|(id, details)| Student::new(*id, details.clone()))
            .collect())
    }
}
