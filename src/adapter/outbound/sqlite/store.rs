//! SQLite student store implementation.
//!
//! Provides persistent storage for student records using SQLite and Diesel
//! ORM. Each call opens its own connection, runs one statement and closes
//! the connection again.

use diesel::prelude::*;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::Database;
use crate::adapter::outbound::sqlite::database::model::{StudentChangeset, StudentRow};
use crate::adapter::outbound::sqlite::database::schema::students;
use crate::domain::id::StudentId;
use crate::domain::student::{Student, StudentDetails};
use crate::error::{Error, Result};
use crate::port::outbound::store::StudentStore;

/// SQLite-backed student store.
///
/// Implements the [`StudentStore`] trait against a single database file.
#[derive(Debug, Clone)]
pub struct SqliteStudentStore {
    database: Database,
}

impl SqliteStudentStore {
    /// Create a new store over `database`.
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl StudentStore for SqliteStudentStore {
    fn list(&self) -> Result<Vec<Student>> {
        let mut conn = self.database.connect()?;

        let rows: Vec<StudentRow> = students::table
            .select(StudentRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(rows = rows.len(), "Loaded students");
        Ok(rows.into_iter().map(Student::from).collect())
    }

    fn insert(&self, details: &StudentDetails) -> Result<()> {
        let mut conn = self.database.connect()?;

        let inserted = diesel::insert_into(students::table)
            .values(StudentChangeset::from(details))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(rows = inserted, "Inserted student");
        Ok(())
    }

    fn update(&self, id: StudentId, details: &StudentDetails) -> Result<bool> {
        let mut conn = self.database.connect()?;

        let updated = diesel::update(students::table.find(id.get()))
            .set(StudentChangeset::from(details))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(%id, rows = updated, "Updated student");
        Ok(updated > 0)
    }

    fn delete(&self, id: StudentId) -> Result<bool> {
        let mut conn = self.database.connect()?;

        let deleted = diesel::delete(students::table.find(id.get()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(%id, rows = deleted, "Deleted student");
        Ok(deleted > 0)
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Student>> {
        let mut conn = self.database.connect()?;

        let rows: Vec<StudentRow> = students::table
            .filter(students::name.eq(name))
            .select(StudentRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(name, rows = rows.len(), "Searched students by name");
        Ok(rows.into_iter().map(Student::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_db() -> (TempDir, SqliteStudentStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database =
            Database::open(dir.path().join("database.db")).expect("Failed to open database");
        (dir, SqliteStudentStore::new(database))
    }

    fn details(name: &str, course: &str, mobile: &str) -> StudentDetails {
        StudentDetails::new(name, course, mobile)
    }

    // -------------------------------------------------------------------------
    // Basic CRUD operations
    // -------------------------------------------------------------------------

    #[test]
    fn insert_then_list_assigns_first_id() {
        let (_dir, store) = setup_test_db();

        store.insert(&details("Ann", "Math", "5551234")).unwrap();
        let rows = store.list().unwrap();

        assert_eq!(
            rows,
            vec![Student::new(
                StudentId::new(1),
                details("Ann", "Math", "5551234")
            )]
        );
    }

    #[test]
    fn insert_grows_roster_by_one() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();
        let before = store.list().unwrap().len();

        store.insert(&details("Bob", "Biology", "2")).unwrap();

        assert_eq!(store.list().unwrap().len(), before + 1);
    }

    #[test]
    fn insert_accepts_blank_fields() {
        let (_dir, store) = setup_test_db();

        store.insert(&details("", "Math", "")).unwrap();

        let rows = store.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "");
        assert_eq!(rows[0].mobile(), "");
    }

    #[test]
    fn insert_stores_courses_outside_the_offered_list() {
        let (_dir, store) = setup_test_db();

        store.insert(&details("Ann", "Chemistry", "1")).unwrap();

        assert_eq!(store.list().unwrap()[0].course(), "Chemistry");
    }

    #[test]
    fn update_changes_only_the_target_row() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "5551234")).unwrap();
        store.insert(&details("Bob", "Biology", "5550000")).unwrap();

        let updated = store
            .update(StudentId::new(1), &details("Ann B.", "Physics", "5559999"))
            .unwrap();

        assert!(updated);
        let rows = store.list().unwrap();
        let ann = rows.iter().find(|s| s.id == StudentId::new(1)).unwrap();
        let bob = rows.iter().find(|s| s.id == StudentId::new(2)).unwrap();
        assert_eq!(ann.details, details("Ann B.", "Physics", "5559999"));
        assert_eq!(bob.details, details("Bob", "Biology", "5550000"));
    }

    #[test]
    fn update_missing_row_is_a_silent_no_op() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();

        let updated = store
            .update(StudentId::new(99), &details("X", "Math", "2"))
            .unwrap();

        assert!(!updated);
        assert_eq!(store.list().unwrap()[0].name(), "Ann");
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();
        store.insert(&details("Bob", "Biology", "2")).unwrap();

        assert!(store.delete(StudentId::new(1)).unwrap());

        let rows = store.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, StudentId::new(2));
        assert!(!store.delete(StudentId::new(1)).unwrap()); // Already deleted
    }

    #[test]
    fn delete_missing_row_leaves_roster_unchanged() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();
        let before = store.list().unwrap();

        assert!(!store.delete(StudentId::new(42)).unwrap());

        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn rowids_beyond_32_bits_keep_their_identity() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();
        {
            let mut conn = store.database().connect().unwrap();
            diesel::sql_query(
                "INSERT INTO students (id, name, course, mobile) VALUES (4294967297, 'Zed', 'Math', '2')",
            )
            .execute(&mut conn)
            .unwrap();
        }

        let rows = store.list().unwrap();
        let zed = rows.iter().find(|s| s.name() == "Zed").unwrap();
        assert_eq!(zed.id, StudentId::new(4_294_967_297));

        assert!(store.delete(zed.id).unwrap());

        let rows = store.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, StudentId::new(1));
        assert_eq!(rows[0].name(), "Ann");
    }

    #[test]
    fn insert_after_a_large_rowid_continues_from_it() {
        let (_dir, store) = setup_test_db();
        {
            let mut conn = store.database().connect().unwrap();
            diesel::sql_query(
                "INSERT INTO students (id, name, course, mobile) VALUES (4294967297, 'Zed', 'Math', '2')",
            )
            .execute(&mut conn)
            .unwrap();
        }

        store.insert(&details("Ann", "Math", "1")).unwrap();

        let ann = store.find_by_name("Ann").unwrap();
        assert_eq!(ann[0].id, StudentId::new(4_294_967_298));
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    #[test]
    fn find_by_name_returns_every_exact_match() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();
        store.insert(&details("Bob", "Biology", "2")).unwrap();
        store.insert(&details("Ann", "Physics", "3")).unwrap();

        let found = store.find_by_name("Ann").unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.name() == "Ann"));
    }

    #[test]
    fn find_by_name_is_case_sensitive_and_exact() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();

        assert!(store.find_by_name("ann").unwrap().is_empty());
        assert!(store.find_by_name("An").unwrap().is_empty());
    }

    #[test]
    fn find_by_name_ignores_other_columns() {
        let (_dir, store) = setup_test_db();
        store.insert(&details("Ann", "Math", "1")).unwrap();

        assert!(store.find_by_name("Math").unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Full lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn insert_update_delete_lifecycle() {
        let (_dir, store) = setup_test_db();

        store.insert(&details("Ann", "Math", "5551234")).unwrap();
        assert_eq!(
            store.list().unwrap(),
            vec![Student::new(
                StudentId::new(1),
                details("Ann", "Math", "5551234")
            )]
        );

        store
            .update(StudentId::new(1), &details("Ann B.", "Physics", "5559999"))
            .unwrap();
        assert_eq!(
            store.list().unwrap(),
            vec![Student::new(
                StudentId::new(1),
                details("Ann B.", "Physics", "5559999")
            )]
        );

        store.delete(StudentId::new(1)).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn reads_null_columns_from_foreign_rows() {
        let (_dir, store) = setup_test_db();
        {
            let mut conn = store.database().connect().unwrap();
            diesel::sql_query("INSERT INTO students (name, course, mobile) VALUES (NULL, 'Math', NULL)")
                .execute(&mut conn)
                .unwrap();
        }

        let rows = store.list().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "");
        assert_eq!(rows[0].course(), "Math");
    }

    #[test]
    fn operations_fail_cleanly_without_a_database_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStudentStore::new(Database::new(
            dir.path().join("missing").join("database.db"),
        ));

        assert!(matches!(store.list(), Err(Error::Connection(_))));
        assert!(matches!(
            store.insert(&details("Ann", "Math", "1")),
            Err(Error::Connection(_))
        ));
    }
}
