pub(crate) mod ingest;
pub(crate) mod schema;

use framedata_ingest::IngestConfig;
use std::path::PathBuf;

/// Environment-derived settings with the `--db` flag applied on top.
pub(crate) fn resolve_config(db: Option<PathBuf>) -> IngestConfig {
    let config = IngestConfig::from_env();
    match db {
        Some(path) => config.with_db_path(path),
        None => config,
    }
}
