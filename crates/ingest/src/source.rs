//! Where a payload comes from.

use std::path::PathBuf;

use async_trait::async_trait;
use framedata_core::Payload;

use crate::client::FrameDataClient;
use crate::error::IngestError;

/// Anything that can produce one frame-data payload per call.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Human-readable origin, for log lines.
    fn describe(&self) -> String;

    /// Fetch and parse the payload.
    async fn fetch_payload(&self) -> Result<Payload, IngestError>;
}

#[async_trait]
impl PayloadSource for FrameDataClient {
    fn describe(&self) -> String {
        self.url().to_owned()
    }

    async fn fetch_payload(&self) -> Result<Payload, IngestError> {
        self.fetch().await
    }
}

/// A frame-data document saved on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PayloadSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_payload(&self) -> Result<Payload, IngestError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| IngestError::FileRead { path: self.path.clone(), source })?;
        Payload::from_json(&text).map_err(|source| IngestError::JsonParse {
            context: self.path.display().to_string(),
            source,
        })
    }
}
