//! SQLite storage bootstrap for user preferences and lookup history.
//!
//! # Responsibility
//! - Open and configure the history database.
//! - Bring its schema up to date before any repository touches it.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No repository reads or writes before migrations succeed.
//! - Open and migration failures name the database or version involved.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// History database failures.
#[derive(Debug)]
pub enum DbError {
    /// The history database at `location` could not be opened or configured.
    Open {
        location: String,
        source: rusqlite::Error,
    },
    /// History schema migration `version` failed to apply.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The database was written by a newer build with a newer history schema.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Statement failure on an already open history database.
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "failed to open history database `{location}`: {source}")
            }
            Self::Migration { version, source } => {
                write!(f, "history schema migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "history schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Sqlite(err) => write!(f, "history database error: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
