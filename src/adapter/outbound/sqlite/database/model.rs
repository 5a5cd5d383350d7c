//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::students;
use crate::domain::id::StudentId;
use crate::domain::student::{Student, StudentDetails};

/// Database row for a student (queryable).
///
/// Text columns are nullable in the table definition; rows written by other
/// tools may hold NULLs.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub id: i64,
    pub name: Option<String>,
    pub course: Option<String>,
    pub mobile: Option<String>,
}

/// Column values written by inserts and updates.
#[derive(Insertable, AsChangeset, Debug, Clone, Copy)]
#[diesel(table_name = students)]
pub struct StudentChangeset<'a> {
    pub name: &'a str,
    pub course: &'a str,
    pub mobile: &'a str,
}

impl<'a> From<&'a StudentDetails> for StudentChangeset<'a> {
    fn from(details: &'a StudentDetails) -> Self {
        Self {
            name: &details.name,
            course: &details.course,
            mobile: &details.mobile,
        }
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(
            StudentId::new(row.id),
            StudentDetails {
                name: row.name.unwrap_or_default(),
                course: row.course.unwrap_or_default(),
                mobile: row.mobile.unwrap_or_default(),
            },
        )
    }
}
