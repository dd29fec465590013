//! Schema-only and read-only commands.

use framedata_storage::Storage;
use std::path::PathBuf;

use super::resolve_config;

pub(crate) fn init(db: Option<PathBuf>) -> anyhow::Result<()> {
    let config = resolve_config(db);
    Storage::open(&config.db_path)?;
    println!("Schema ready at {}", config.db_path.display());
    Ok(())
}

pub(crate) fn stats(db: Option<PathBuf>) -> anyhow::Result<()> {
    let config = resolve_config(db);
    let storage = Storage::open(&config.db_path)?;
    let stats = storage.get_stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
