//! Board record contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide load/save APIs over the per-user `board_state` row.
//! - Keep SQL and JSON column details inside the persistence boundary.
//!
//! # Invariants
//! - `load` returns `Ok(None)` for an absent row; absence is not an error.
//! - `save` is a whole-record upsert keyed by `user_id` and refuses blank
//!   user ids with `AuthRequired`.
//! - Corrupt JSON in a persisted row surfaces as `InvalidData`, never as a
//!   silently empty board.

use crate::db::DbError;
use crate::model::board::{BoardSnapshot, Column, Sticker};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for board persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// A write was attempted without a resolved user identity.
    AuthRequired,
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthRequired => write!(f, "board write requires a signed-in user"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted board data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AuthRequired => None,
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

/// Repository interface for per-user board records.
pub trait BoardRepository {
    /// Loads the record for `user_id`, or `Ok(None)` when none exists.
    fn load(&self, user_id: &str) -> RepoResult<Option<BoardSnapshot>>;

    /// Inserts or fully replaces the record for `user_id`.
    fn save(&self, user_id: &str, snapshot: &BoardSnapshot) -> RepoResult<()>;
}

/// SQLite-backed board repository over the `board_state` table.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BoardRepository for SqliteBoardRepository<'_> {
    fn load(&self, user_id: &str) -> RepoResult<Option<BoardSnapshot>> {
        let mut stmt = self.conn.prepare(
            "SELECT columns, stickers
             FROM board_state
             WHERE user_id = ?1;",
        )?;

        let mut rows = stmt.query(params![user_id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let columns_json: String = row.get("columns")?;
        let stickers_json: String = row.get("stickers")?;

        let columns: Vec<Column> = serde_json::from_str(&columns_json).map_err(|err| {
            RepoError::InvalidData(format!("board_state.columns is not valid JSON: {err}"))
        })?;
        let stickers: Vec<Sticker> = serde_json::from_str(&stickers_json).map_err(|err| {
            RepoError::InvalidData(format!("board_state.stickers is not valid JSON: {err}"))
        })?;

        Ok(Some(BoardSnapshot { columns, stickers }))
    }

    fn save(&self, user_id: &str, snapshot: &BoardSnapshot) -> RepoResult<()> {
        if user_id.trim().is_empty() {
            return Err(RepoError::AuthRequired);
        }

        let columns_json = serde_json::to_string(&snapshot.columns)
            .map_err(|err| RepoError::InvalidData(format!("columns not serializable: {err}")))?;
        let stickers_json = serde_json::to_string(&snapshot.stickers)
            .map_err(|err| RepoError::InvalidData(format!("stickers not serializable: {err}")))?;

        self.conn.execute(
            "INSERT INTO board_state (user_id, columns, stickers)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (user_id) DO UPDATE SET
                columns = excluded.columns,
                stickers = excluded.stickers,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![user_id, columns_json, stickers_json],
        )?;

        Ok(())
    }
}
