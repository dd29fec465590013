#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod v1;

use rusqlite::Connection;

use crate::error::{Result, StorageError};

pub const SCHEMA_VERSION: i32 = 1;

/// Bring the schema up to [`SCHEMA_VERSION`]. Safe to call on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version > SCHEMA_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema version {current_version} is newer than supported version {SCHEMA_VERSION}"
        )));
    }

    if current_version == SCHEMA_VERSION {
        tracing::debug!("Database schema up to date (version {})", SCHEMA_VERSION);
        return Ok(());
    }

    if current_version < 1i32 {
        tracing::info!("Running migration v1: characters and moves tables");
        conn.execute_batch(v1::SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
