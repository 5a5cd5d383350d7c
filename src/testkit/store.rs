//! Controllers over the in-memory store.

pub use crate::adapter::outbound::memory::MemoryStudentStore;

use crate::application::roster::RosterController;
use crate::domain::student::StudentDetails;

/// Controller over an empty in-memory store.
pub fn empty_controller() -> RosterController<MemoryStudentStore> {
    RosterController::new(MemoryStudentStore::new())
}

/// Controller over an in-memory store holding `students`, ids from 1.
pub fn controller<I>(students: I) -> RosterController<MemoryStudentStore>
where
    I: IntoIterator<Item = StudentDetails>,
{
    RosterController::new(MemoryStudentStore::with_students(students))
}
