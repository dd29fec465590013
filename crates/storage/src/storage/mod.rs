//! `SQLite` storage implementation
//!
//! All methods are synchronous; the connection is owned by one [`Storage`].

// SQLite uses i64 for counts, Rust uses usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod batch;
mod characters;
mod moves;
mod stats;

use rusqlite::Connection;
use std::path::Path;

use crate::error::{Result, StorageError};
use crate::migrations;

pub use batch::LoadBatch;
pub use characters::CharacterInsert;
pub use stats::StorageStats;

/// Main storage struct wrapping the `SQLite` connection
#[derive(Debug)]
pub struct Storage {
    pub(crate) conn: Connection,
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Per-connection settings; foreign keys are off by default in `SQLite`.
fn init_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )?;
    Ok(())
}

/// Create the parent directory of `db_path` if it does not exist yet.
fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
    }
    Ok(())
}

impl Storage {
    /// Open (or create) the database file and make sure the schema exists.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created, the file cannot be
    /// opened, or the schema cannot be initialized.
    pub fn open(db_path: &Path) -> Result<Self> {
        ensure_db_dir(db_path)?;
        let conn = Connection::open(db_path)?;
        let storage = Self::from_connection(conn)?;
        tracing::info!(path = %db_path.display(), "Storage initialized");
        Ok(storage)
    }

    /// Open a private in-memory database with the schema applied.
    ///
    /// # Errors
    /// Returns error if the schema cannot be initialized.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_connection(&conn)?;
        let storage = Self { conn };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Create the `characters` and `moves` tables if absent.
    ///
    /// Idempotent; [`Storage::open`] already calls it.
    ///
    /// # Errors
    /// Returns error if DDL execution fails or the file carries a newer schema.
    pub fn init_schema(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)
    }

    /// Start the single transaction an ingestion run writes through.
    ///
    /// Nothing is visible to other connections until [`LoadBatch::commit`];
    /// dropping the batch rolls everything back.
    ///
    /// # Errors
    /// Returns error if the transaction cannot be started.
    pub fn begin(&mut self) -> Result<LoadBatch<'_>> {
        Ok(LoadBatch::new(self.conn.transaction()?))
    }
}
