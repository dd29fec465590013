use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur while reading a frame-data payload
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Payload parse error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, CoreError>;
