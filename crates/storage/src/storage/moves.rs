use framedata_core::{CharacterId, Move, MoveFrames, NewMove};
use rusqlite::{Connection, params};

use super::{Storage, log_row_error};
use crate::error::Result;

/// Append a move for `char_id`. Moves carry no natural key, so re-runs add rows.
pub(crate) fn insert(conn: &Connection, char_id: CharacterId, mv: &NewMove) -> Result<i64> {
    conn.execute(
        "INSERT INTO moves
           (char_id, move_name, input_type, startup, total_frames, landing_lag,
            shield_advantage, base_damage, note)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            char_id.0,
            mv.name,
            mv.input_type,
            mv.frames.startup,
            mv.frames.total_frames,
            mv.frames.landing_lag,
            mv.frames.shield_advantage,
            mv.base_damage,
            mv.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn row_to_move(row: &rusqlite::Row<'_>) -> rusqlite::Result<Move> {
    Ok(Move {
        id: row.get(0)?,
        char_id: CharacterId(row.get(1)?),
        name: row.get(2)?,
        input_type: row.get(3)?,
        frames: MoveFrames {
            startup: row.get(4)?,
            total_frames: row.get(5)?,
            landing_lag: row.get(6)?,
            shield_advantage: row.get(7)?,
        },
        base_damage: row.get(8)?,
        note: row.get(9)?,
    })
}

impl Storage {
    /// Append a move outside of a load batch.
    ///
    /// # Errors
    /// Returns a constraint error if `char_id` does not reference a character.
    pub fn insert_move(&self, char_id: CharacterId, mv: &NewMove) -> Result<i64> {
        insert(&self.conn, char_id, mv)
    }

    /// Moves of one character, in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn moves_for_character(&self, char_id: CharacterId) -> Result<Vec<Move>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, char_id, move_name, input_type, startup, total_frames, landing_lag,
                    shield_advantage, base_damage, note
               FROM moves WHERE char_id = ?1 ORDER BY id",
        )?;
        let moves = stmt.query_map(params![char_id.0], row_to_move)?.filter_map(log_row_error).collect();
        Ok(moves)
    }

    /// Number of moves whose `char_id` has no matching character.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_orphan_moves(&self) -> Result<usize> {
        let orphans: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM moves m
               LEFT JOIN characters c ON c.id = m.char_id
              WHERE c.id IS NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(orphans as usize)
    }
}
