//! HTTP page source.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::PageSource;

/// Fetches pages over plain HTTP with default client settings.
///
/// One GET per call, nothing customized on the client and nothing
/// retried. Only a 200 response yields a body; any other status is
/// reported as "no content" rather than an error, while transport-level
/// failures propagate.
#[derive(Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPageSource {
    /// Create a new HTTP page source.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> FetchResult<Option<String>> {
        debug!(url = %url, "page fetch starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "page fetch failed");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = %status, "non-200 status, no content");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(url = %url, bytes = body.len(), "page fetched");
        Ok(Some(body))
    }
}
