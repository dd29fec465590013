//! Typed error enum for the ingest crate.

use std::path::PathBuf;

use framedata_core::CoreError;
use framedata_storage::StorageError;
use thiserror::Error;

/// Errors from fetching or loading a frame-data payload.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: CoreError,
    },
    #[error("cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl IngestError {
    /// Whether the payload could not be obtained (transport, status, parse, file).
    ///
    /// These abort a run before anything is written.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::HttpRequest(_) | Self::HttpStatus { .. } | Self::JsonParse { .. } | Self::FileRead { .. }
        )
    }

    /// Whether the request gave up because the configured timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_timeout())
    }
}
