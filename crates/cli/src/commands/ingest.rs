//! Default command: one ingestion run.
//!
//! A failed fetch is reported on stdout and the process still exits 0;
//! only storage failures surface as an error exit.

use std::path::PathBuf;
use std::time::Duration;

use framedata_ingest::{FileSource, FrameDataClient, IngestOutcome, run as run_pipeline};
use framedata_storage::Storage;

use super::resolve_config;
use crate::IngestArgs;

pub(crate) async fn run(db: Option<PathBuf>, args: IngestArgs) -> anyhow::Result<()> {
    let mut config = resolve_config(db);
    if let Some(url) = args.url {
        config = config.with_source_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let mut storage = Storage::open(&config.db_path)?;

    let result = if let Some(path) = args.file {
        println!("Loading frame data from {}", path.display());
        run_pipeline(&FileSource::new(path), &mut storage).await
    } else {
        println!("Fetching frame data from {}", config.source_url);
        let client = FrameDataClient::new(config.source_url.as_str(), config.timeout)?;
        run_pipeline(&client, &mut storage).await
    };
    let outcome = result.inspect_err(|e| {
        tracing::error!(error = %e, db = %config.db_path.display(), "Ingestion failed, run rolled back");
    })?;

    match outcome {
        IngestOutcome::Done(report) => {
            println!(
                "  fighters: {}, characters: {} new / {} already present, moves: {} inserted",
                report.fighters,
                report.characters_inserted,
                report.characters_existing,
                report.moves_inserted
            );
            println!("Database built successfully: {}", config.db_path.display());
        },
        IngestOutcome::Aborted(err) => {
            println!("Failed to fetch frame data: {err}");
        },
    }
    Ok(())
}
