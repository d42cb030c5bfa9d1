//! Durable key-value byte store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the whole-value read/write seam the stores persist through.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Reads and writes are atomic and whole-value; there are no partial
//!   updates of a stored blob.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BlobResult<T> = Result<T, BlobError>;

/// Transport failure of the durable byte store.
#[derive(Debug)]
pub enum BlobError {
    Db(DbError),
}

impl Display for BlobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BlobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for BlobError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for BlobError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value byte store keyed by fixed string keys.
///
/// This is the external-collaborator boundary of the persistence design:
/// callers treat read/write as synchronous, atomic and whole-value.
pub trait BlobStore {
    /// Reads the blob stored under `key`, or `None` when the key is absent.
    fn read(&self, key: &str) -> BlobResult<Option<Vec<u8>>>;

    /// Writes `value` under `key`, replacing any previous blob in full.
    fn write(&self, key: &str, value: &[u8]) -> BlobResult<()>;
}

/// SQLite-backed blob store over the `kv_blobs` table.
pub struct SqliteBlobStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlobStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BlobStore for SqliteBlobStore<'_> {
    fn read(&self, key: &str) -> BlobResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_blobs WHERE key = ?1;", [key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &[u8]) -> BlobResult<()> {
        self.conn.execute(
            "INSERT INTO kv_blobs (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value,
                 updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
