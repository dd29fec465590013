//! Shared constants for framedata.
//!
//! Defaults used when neither a CLI flag nor an environment variable is given.

/// Default frame-data source endpoint.
pub const DEFAULT_SOURCE_URL: &str = "https://api.ultimateframedata.com/stats";

/// Default database location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/framedata.db";

/// Default HTTP timeout for the payload fetch, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the source URL.
pub const ENV_SOURCE_URL: &str = "FRAMEDATA_SOURCE_URL";

/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "FRAMEDATA_DB_PATH";

/// Environment variable overriding the HTTP timeout.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "FRAMEDATA_HTTP_TIMEOUT_SECS";

/// Source placeholder for "not applicable".
pub const NOT_APPLICABLE: &str = "-";
