//! Database connection management using Diesel ORM.
//!
//! Every operation opens its own connection and drops it when done; nothing
//! is pooled or shared between statements.

use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A SQLite database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Refer to the database at `path` without touching it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Refer to the database at `path` and make sure the schema exists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or migrated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let database = Self::new(path);
        database.run_migrations()?;
        Ok(database)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection with pragmas applied.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established.
    pub fn connect(&self) -> Result<SqliteConnection> {
        let url = self.path.to_string_lossy();
        let mut conn =
            SqliteConnection::establish(&url).map_err(|e| Error::Connection(e.to_string()))?;
        configure_sqlite_connection(&mut conn)?;
        Ok(conn)
    }

    /// Run all pending database migrations.
    ///
    /// # Errors
    /// Returns an error if migrations fail.
    pub fn run_migrations(&self) -> Result<()> {
        let mut conn = self.connect()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| Error::Connection(e.to_string()))?;
        debug!(
            path = %self.path.display(),
            applied = applied.len(),
            "Database migrations complete"
        );
        Ok(())
    }
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000")
        .execute(conn)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}
