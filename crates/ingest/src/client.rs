use std::time::Duration;

use framedata_core::Payload;

use crate::error::IngestError;

/// Maximum number of body bytes quoted in error messages.
pub const MAX_ERROR_BODY_LEN: usize = 200;

/// Client for the remote frame-data endpoint.
#[derive(Debug, Clone)]
pub struct FrameDataClient {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
}

impl FrameDataClient {
    /// Creates a client for `url` whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, IngestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("framedata/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IngestError::ClientInit(e.to_string()))?;
        Ok(Self { client, url: url.into() })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the endpoint once and parse the body into a [`Payload`].
    ///
    /// No retries: any transport error, non-success status or malformed
    /// body is returned to the caller as is.
    ///
    /// # Errors
    /// Returns an error if the request fails or times out, the server
    /// answers with a non-success status, or the body is not a frame-data
    /// document.
    pub async fn fetch(&self) -> Result<Payload, IngestError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(IngestError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url = %self.url, bytes = body.len(), "Payload downloaded");

        Payload::from_json(&body).map_err(|e| IngestError::JsonParse {
            context: format!(
                "payload from {} (body: {})",
                self.url,
                truncate(&body, MAX_ERROR_BODY_LEN)
            ),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
