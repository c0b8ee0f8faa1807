//! Trait seams for the analysis pipeline.
//!
//! Both external dependencies (the marketplace pages and the completion
//! API) sit behind async traits so the orchestrator can be driven by
//! mocks in tests (see [`crate::testing`]).

use async_trait::async_trait;

use completion_client::{CompletionClient, CompletionError, CompletionRequest};

use crate::error::FetchResult;

/// Source of marketplace page bodies.
///
/// Implementations fetch one URL per call. A page that exists but
/// returns a non-success status is `Ok(None)`; transport failures are
/// errors.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of a single URL.
    async fn fetch(&self, url: &str) -> FetchResult<Option<String>>;
}

/// Backend for text-completion calls.
///
/// Implementations wrap a specific completion provider and return the
/// top choice's text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one completion request and return the resulting text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let response = CompletionClient::complete(self, request).await?;
        Ok(response.text)
    }
}
