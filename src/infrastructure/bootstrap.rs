//! Composition root: wires the configured database to a roster controller.

use std::path::Path;

use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::Database;
use crate::adapter::outbound::sqlite::store::SqliteStudentStore;
use crate::application::roster::RosterController;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Controller backed by the SQLite file at `path`, creating the table if
/// needed.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open_roster(path: impl AsRef<Path>) -> Result<RosterController<SqliteStudentStore>> {
    let path = path.as_ref();
    let database = Database::open(path)?;
    debug!(path = %path.display(), "Database ready");
    Ok(RosterController::new(SqliteStudentStore::new(database)))
}

/// Controller for the database named in `config`.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn build_roster(config: &Config) -> Result<RosterController<SqliteStudentStore>> {
    open_roster(&config.database)
}
