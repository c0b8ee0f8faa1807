//! Pure REST client for the legacy text-completion API
//!
//! A clean, minimal client for the `/completions` endpoint with no
//! domain-specific logic. One request in, the top choice's text out.
//!
//! # Example
//!
//! ```rust,ignore
//! use completion_client::{CompletionClient, CompletionRequest};
//!
//! let client = CompletionClient::from_env()?;
//!
//! let response = client
//!     .complete(
//!         CompletionRequest::new("gpt-3.5-turbo-instruct", "Suggest a fair price for ...")
//!             .max_tokens(150)
//!             .temperature(0.0),
//!     )
//!     .await?;
//!
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{CompletionError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure completion API client.
#[derive(Clone)]
pub struct CompletionClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    /// Create a new completion client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| CompletionError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, compatible servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Text completion.
    ///
    /// Sends the prompt to the completions API and returns the first
    /// choice's text. An empty choice list is a malformed response and
    /// yields an [`CompletionError::Api`].
    pub async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "completion request failed");
                CompletionError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "completion API error");
            return Err(CompletionError::Api(format!(
                "completion API error: {}",
                error_text
            )));
        }

        let raw: types::CompletionResponseRaw = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let text = raw
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or_else(|| CompletionError::Api("no choices in completion response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "completion finished"
        );

        Ok(CompletionResponse {
            text,
            usage: raw.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = CompletionClient::new("sk-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }
}
