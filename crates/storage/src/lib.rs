//! Storage layer for framedata
//!
//! SQLite storage for characters and their moves. One exclusively owned
//! connection; ingestion writes go through a single [`LoadBatch`] transaction.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::{Result, StorageError};
pub use migrations::SCHEMA_VERSION;
pub use storage::{CharacterInsert, LoadBatch, Storage, StorageStats};
