//! Builders for domain values used across tests.

use crate::domain::id::StudentId;
use crate::domain::roster::Roster;
use crate::domain::student::{Student, StudentDetails};

/// Create [`StudentDetails`] from string slices.
pub fn details(name: &str, course: &str, mobile: &str) -> StudentDetails {
    StudentDetails::new(name, course, mobile)
}

/// Create a stored [`Student`].
pub fn student(id: i64, name: &str, course: &str, mobile: &str) -> Student {
    Student::new(StudentId::new(id), details(name, course, mobile))
}

/// Three students, two of them named "Ann".
pub fn sample_details() -> Vec<StudentDetails> {
    vec![
        details("Ann", "Math", "5551234"),
        details("Bob", "Biology", "5550000"),
        details("Ann", "Physics", "5559999"),
    ]
}

/// [`sample_details`] as a roster with ids 1, 2 and 3.
pub fn sample_roster() -> Roster {
    Roster::new(
        sample_details()
            .into_iter()
            .zip(1..)
            .map(|(details, id)| Student::new(StudentId::new(id), details))
            .collect(),
    )
}
