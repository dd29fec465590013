use serde::{Deserialize, Serialize};

use super::Storage;
use crate::error::Result;

/// Row counts of the two tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStats {
    pub character_count: u64,
    pub move_count: u64,
}

impl Storage {
    /// Get storage statistics.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_stats(&self) -> Result<StorageStats> {
        let character_count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM characters", [], |row| row.get(0))?;
        let move_count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM moves", [], |row| row.get(0))?;
        Ok(StorageStats {
            character_count: character_count as u64,
            move_count: move_count as u64,
        })
    }
}
