//! History repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist per-user translation target language.
//! - Append, list and clear lookup/translation history.
//!
//! # Invariants
//! - Stored texts are truncated to `MAX_HISTORY_TEXT_CHARS` characters.
//! - History listing order is `created_at DESC, id DESC` (newest first).
//! - Unknown users read as the default target language.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::history::{
    truncate_chars, HistoryEntry, HistoryKind, NewHistoryEntry, TargetLanguage,
    UnsupportedLanguage, UserId, MAX_HISTORY_TEXT_CHARS,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Default number of entries returned by [`HistoryRepository::recent`].
pub const HISTORY_DEFAULT_LIMIT: u32 = 10;
/// Upper bound for one history page.
pub const HISTORY_LIMIT_MAX: u32 = 50;

const HISTORY_SELECT_SQL: &str = "SELECT
    uuid,
    user_id,
    kind,
    original_text,
    result_text,
    source_lang,
    target_lang,
    created_at
FROM history";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for history and user-preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted history data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for users and their history.
pub trait HistoryRepository {
    /// Registers a user if absent. Returns `true` when a row was inserted.
    fn ensure_user(&self, user_id: UserId, username: &str, first_name: &str) -> RepoResult<bool>;
    fn target_language(&self, user_id: UserId) -> RepoResult<TargetLanguage>;
    fn set_target_language(&self, user_id: UserId, language: TargetLanguage) -> RepoResult<()>;
    fn append(&self, entry: &NewHistoryEntry) -> RepoResult<HistoryEntry>;
    /// Newest entries first; `None` uses [`HISTORY_DEFAULT_LIMIT`].
    fn recent(&self, user_id: UserId, limit: Option<u32>) -> RepoResult<Vec<HistoryEntry>>;
    /// Deletes all history of one user. Returns the number of removed rows.
    fn clear(&self, user_id: UserId) -> RepoResult<usize>;
}

/// SQLite-backed history repository.
pub struct SqliteHistoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHistoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl HistoryRepository for SqliteHistoryRepository<'_> {
    fn ensure_user(&self, user_id: UserId, username: &str, first_name: &str) -> RepoResult<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO users (user_id, username, first_name)
             VALUES (?1, ?2, ?3);",
            params![user_id, username, first_name],
        )?;
        Ok(inserted > 0)
    }

    fn target_language(&self, user_id: UserId) -> RepoResult<TargetLanguage> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT target_language FROM users WHERE user_id = ?1;",
                [user_id],
                |row| row.get(0),
            )
            .optional()?;

        match stored {
            Some(code) => TargetLanguage::parse(&code).map_err(|UnsupportedLanguage(code)| {
                RepoError::InvalidData(format!(
                    "invalid target language `{code}` in users.target_language"
                ))
            }),
            None => Ok(TargetLanguage::default()),
        }
    }

    fn set_target_language(&self, user_id: UserId, language: TargetLanguage) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO users (user_id, target_language)
             VALUES (?1, ?2)
             ON CONFLICT(user_id) DO UPDATE SET target_language = excluded.target_language;",
            params![user_id, language.code()],
        )?;
        Ok(())
    }

    fn append(&self, entry: &NewHistoryEntry) -> RepoResult<HistoryEntry> {
        let uuid = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO history (
                uuid,
                user_id,
                kind,
                original_text,
                result_text,
                source_lang,
                target_lang
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                uuid.to_string(),
                entry.user_id,
                entry.kind.as_str(),
                truncate_chars(&entry.original_text, MAX_HISTORY_TEXT_CHARS),
                truncate_chars(&entry.result_text, MAX_HISTORY_TEXT_CHARS),
                entry.source_lang.as_str(),
                entry.target_lang.as_str(),
            ],
        )?;

        let row_id = self.conn.last_insert_rowid();
        let mut stmt = self
            .conn
            .prepare(&format!("{HISTORY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([row_id])?;
        match rows.next()? {
            Some(row) => parse_history_row(row),
            None => Err(RepoError::InvalidData(format!(
                "history row {row_id} vanished after insert"
            ))),
        }
    }

    fn recent(&self, user_id: UserId, limit: Option<u32>) -> RepoResult<Vec<HistoryEntry>> {
        let limit = normalize_history_limit(limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(&format!(
            "{HISTORY_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2;"
        ))?;
        let mut rows = stmt.query(params![user_id, i64::from(limit)])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_history_row(row)?);
        }

        Ok(entries)
    }

    fn clear(&self, user_id: UserId) -> RepoResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM history WHERE user_id = ?1;", [user_id])?;
        Ok(removed)
    }
}

/// Applies the default and clamps to [`HISTORY_LIMIT_MAX`].
pub fn normalize_history_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(HISTORY_DEFAULT_LIMIT)
        .min(HISTORY_LIMIT_MAX)
}

fn parse_history_row(row: &Row<'_>) -> RepoResult<HistoryEntry> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in history.uuid"))
    })?;

    let kind_text: String = row.get("kind")?;
    let kind = HistoryKind::parse(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid history kind `{kind_text}` in history.kind"))
    })?;

    Ok(HistoryEntry {
        uuid,
        user_id: row.get("user_id")?,
        kind,
        original_text: row.get("original_text")?,
        result_text: row.get("result_text")?,
        source_lang: row.get("source_lang")?,
        target_lang: row.get("target_lang")?,
        created_at: row.get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{normalize_history_limit, HISTORY_DEFAULT_LIMIT, HISTORY_LIMIT_MAX};

    #[test]
    fn history_limit_defaults_and_clamps() {
        assert_eq!(normalize_history_limit(None), HISTORY_DEFAULT_LIMIT);
        assert_eq!(normalize_history_limit(Some(3)), 3);
        assert_eq!(normalize_history_limit(Some(500)), HISTORY_LIMIT_MAX);
        assert_eq!(normalize_history_limit(Some(0)), 0);
    }
}
