//! Ingestion settings: flag → environment → default.

use std::path::PathBuf;
use std::time::Duration;

use framedata_core::constants::{
    DEFAULT_DB_PATH, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SOURCE_URL, ENV_DB_PATH,
    ENV_HTTP_TIMEOUT_SECS, ENV_SOURCE_URL,
};
use framedata_core::env_config::{env_parse_with_default, env_string_with_default};

/// Where to read from, where to write to, and how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub source_url: String,
    pub db_path: PathBuf,
    pub timeout: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_owned(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl IngestConfig {
    /// Defaults overridden by `FRAMEDATA_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let timeout_secs = env_parse_with_default(ENV_HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS);
        Self {
            source_url: env_string_with_default(ENV_SOURCE_URL, DEFAULT_SOURCE_URL),
            db_path: PathBuf::from(env_string_with_default(ENV_DB_PATH, DEFAULT_DB_PATH)),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }

    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
