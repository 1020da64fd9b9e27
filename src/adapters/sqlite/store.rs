//! SQLite connection scope
//!
//! A [`SqliteStore`] owns exactly one read-only connection. The dispatcher
//! opens one per request and drops it when the request ends, whichever way
//! the handler returned.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

/// Errors raised while opening the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("failed to open database {}: {source}", .path.display())]
    Open {
        /// Path that was opened
        path: PathBuf,
        /// Underlying SQLite error
        #[source]
        source: rusqlite::Error,
    },

    /// A connection-level statement failed
    #[error("database query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Read-only dashboard store backed by one SQLite connection
#[derive(Debug)]
pub struct SqliteStore {
    pub(super) conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Open the database at `path` for reading
    ///
    /// The file must already exist; the schema is owned elsewhere.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch("PRAGMA query_only=ON;")?;

        log::trace!("opened store connection to {}", path.display());
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path of the open database
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SqliteStore {
    fn drop(&mut self) {
        log::trace!("closing store connection to {}", self.path.display());
    }
}
