//! Typed error enum for the storage layer.
//!
//! Lets callers tell a constraint violation (dangling move reference) apart
//! from an I/O or connection failure instead of downcasting opaque boxes.

use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    /// UNIQUE, NOT NULL or FOREIGN KEY constraint rejected a write.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL / connection failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Database directory could not be created.
    #[error("cannot prepare database directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a constraint violation.
    #[must_use]
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// - `SQLITE_CONSTRAINT*` → `Constraint`
/// - Everything else → `Database`
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.clone().unwrap_or_else(|| err.to_string()))
            },
            _ => Self::Database(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
