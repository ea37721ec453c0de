//! Embedded schema migrations.
//!
//! The SQL lives in `backend/migrations` and is compiled into the binary so a
//! fresh database file is brought up to date on startup.

use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database for migrations: {message}")]
    Connect { message: String },

    /// A migration failed to apply.
    #[error("failed to run migrations: {message}")]
    Run { message: String },
}

/// Apply every pending migration to the database at `database_url`.
///
/// Blocks the calling thread; call it before the server starts accepting
/// requests. Returns the versions that were applied.
///
/// # Errors
///
/// Returns [`MigrationError::Connect`] when the database cannot be opened and
/// [`MigrationError::Run`] when a migration fails.
pub fn run_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|err| MigrationError::Connect {
            message: err.to_string(),
        })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Run {
            message: err.to_string(),
        })?
        .into_iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>();

    if !applied.is_empty() {
        info!(count = applied.len(), versions = ?applied, "applied migrations");
    }
    Ok(applied)
}
