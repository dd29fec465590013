//! Frame-data ingestion: fetch one payload, normalize it, load it into storage.

mod client;
mod config;
mod error;
mod pipeline;
mod source;

#[cfg(test)]
mod pipeline_tests;

pub use client::{FrameDataClient, MAX_ERROR_BODY_LEN, truncate};
pub use config::IngestConfig;
pub use error::IngestError;
pub use pipeline::{IngestOutcome, IngestReport, IngestState, load, run};
pub use source::{FileSource, PayloadSource};
