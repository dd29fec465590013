use framedata_core::{CharacterId, NewCharacter, NewMove};
use rusqlite::Transaction;

use super::characters::{self, CharacterInsert};
use super::moves;
use crate::error::Result;

/// Writes of one ingestion run, committed all at once.
///
/// Dropping a batch without [`LoadBatch::commit`] rolls back every write made
/// through it.
pub struct LoadBatch<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> LoadBatch<'conn> {
    pub(super) fn new(tx: Transaction<'conn>) -> Self {
        Self { tx }
    }

    /// Insert-or-ignore a character and resolve its row id.
    ///
    /// # Errors
    /// Returns error if the insert or the id lookup fails.
    pub fn insert_character(&self, character: &NewCharacter) -> Result<CharacterInsert> {
        characters::insert_or_ignore(&self.tx, character)
    }

    /// Append a move for an already-resolved character.
    ///
    /// # Errors
    /// Returns a constraint error if `char_id` does not reference a character.
    pub fn insert_move(&self, char_id: CharacterId, mv: &NewMove) -> Result<i64> {
        moves::insert(&self.tx, char_id, mv)
    }

    /// Make every write of this batch durable.
    ///
    /// # Errors
    /// Returns error if the commit fails; the writes are then rolled back.
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }
}
