use framedata_core::{Character, CharacterId, CharacterStats, NewCharacter};
use rusqlite::{Connection, OptionalExtension as _, params};

use super::{Storage, log_row_error};
use crate::error::{Result, StorageError};

const CHARACTER_COLUMNS: &str = "id, name, weight, run_speed, walk_speed, air_speed, fall_speed, \
     fast_fall_speed, sh_air_time, sh_ff_air_time, fh_air_time, fh_ff_air_time";

/// Outcome of an insert-or-ignore on `characters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterInsert {
    /// A new row was written.
    Inserted(CharacterId),
    /// A row with the same name already existed; its stats were left alone.
    Existing(CharacterId),
}

impl CharacterInsert {
    #[must_use]
    pub const fn id(self) -> CharacterId {
        match self {
            Self::Inserted(id) | Self::Existing(id) => id,
        }
    }

    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// Insert the character unless the name exists, then resolve its id.
///
/// First write wins: an existing row is never updated.
pub(crate) fn insert_or_ignore(conn: &Connection, character: &NewCharacter) -> Result<CharacterInsert> {
    let stats = &character.stats;
    let changed = conn.execute(
        "INSERT OR IGNORE INTO characters
           (name, weight, run_speed, walk_speed, air_speed, fall_speed, fast_fall_speed,
            sh_air_time, sh_ff_air_time, fh_air_time, fh_ff_air_time)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            character.name,
            stats.weight,
            stats.run_speed,
            stats.walk_speed,
            stats.air_speed,
            stats.fall_speed,
            stats.fast_fall_speed,
            stats.sh_air_time,
            stats.sh_ff_air_time,
            stats.fh_air_time,
            stats.fh_ff_air_time,
        ],
    )?;

    if changed > 0 {
        return Ok(CharacterInsert::Inserted(CharacterId(conn.last_insert_rowid())));
    }

    find_id_by_name(conn, &character.name)?
        .map(CharacterInsert::Existing)
        .ok_or_else(|| StorageError::NotFound { entity: "character", key: character.name.clone() })
}

pub(crate) fn find_id_by_name(conn: &Connection, name: &str) -> Result<Option<CharacterId>> {
    let id = conn
        .query_row("SELECT id FROM characters WHERE name = ?1", params![name], |row| row.get(0))
        .optional()?;
    Ok(id.map(CharacterId))
}

fn row_to_character(row: &rusqlite::Row<'_>) -> rusqlite::Result<Character> {
    Ok(Character {
        id: CharacterId(row.get(0)?),
        name: row.get(1)?,
        stats: CharacterStats {
            weight: row.get(2)?,
            run_speed: row.get(3)?,
            walk_speed: row.get(4)?,
            air_speed: row.get(5)?,
            fall_speed: row.get(6)?,
            fast_fall_speed: row.get(7)?,
            sh_air_time: row.get(8)?,
            sh_ff_air_time: row.get(9)?,
            fh_air_time: row.get(10)?,
            fh_ff_air_time: row.get(11)?,
        },
    })
}

impl Storage {
    /// Insert-or-ignore a character outside of a load batch.
    ///
    /// # Errors
    /// Returns error if the insert or the id lookup fails.
    pub fn insert_character(&self, character: &NewCharacter) -> Result<CharacterInsert> {
        insert_or_ignore(&self.conn, character)
    }

    /// Get character by name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_character_by_name(&self, name: &str) -> Result<Option<Character>> {
        let sql = format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE name = ?1");
        let character = self.conn.query_row(&sql, params![name], row_to_character).optional()?;
        Ok(character)
    }

    /// All characters, in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_characters(&self) -> Result<Vec<Character>> {
        let sql = format!("SELECT {CHARACTER_COLUMNS} FROM characters ORDER BY id");
        let mut stmt = self.conn.prepare(&sql)?;
        let characters =
            stmt.query_map([], row_to_character)?.filter_map(log_row_error).collect();
        Ok(characters)
    }
}
