//! Testing utilities including mock implementations.
//!
//! These are useful for exercising the analyzer without real network or
//! completion API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use completion_client::{CompletionError, CompletionRequest};

use crate::error::{FetchError, FetchResult};
use crate::traits::{CompletionBackend, PageSource};

/// A mock page source serving canned bodies.
///
/// URLs without a canned body behave like a non-200 response (no
/// content). Requested URLs are recorded for assertions. Clones share
/// state, so a test can keep a handle while the analyzer owns the other.
#[derive(Clone, Default)]
pub struct MockPageSource {
    /// Canned page bodies indexed by URL
    pages: Arc<RwLock<HashMap<String, String>>>,

    /// URLs that should fail at the transport level
    failing: Arc<RwLock<Vec<String>>>,

    /// URLs requested via fetch
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockPageSource {
    /// Create a new empty mock page source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned body for a URL (builder pattern).
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), body.into());
        self
    }

    /// Make a URL fail with a network error (builder pattern).
    pub fn with_failing(self, url: impl Into<String>) -> Self {
        self.failing.write().unwrap().push(url.into());
        self
    }

    /// Get the URLs that were requested.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Get the number of fetches made.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn fetch(&self, url: &str) -> FetchResult<Option<String>> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        if self.failing.read().unwrap().iter().any(|u| u == url) {
            return Err(FetchError::Network(format!("mock failure for {}", url)));
        }

        Ok(self.pages.read().unwrap().get(url).cloned())
    }
}

/// A mock completion backend returning a canned reply.
///
/// Every request is recorded so tests can assert on the prompt and the
/// fixed sampling parameters. Clones share the recorded requests.
#[derive(Clone)]
pub struct MockCompletion {
    reply: String,
    requests: Arc<RwLock<Vec<CompletionRequest>>>,
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletion {
    /// Create a mock with an empty reply.
    pub fn new() -> Self {
        Self {
            reply: String::new(),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the canned reply (builder pattern).
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }

    /// Get all requests made to this mock.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.read().unwrap().clone()
    }

    /// Get the number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for MockCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.requests.write().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_page_source_serves_canned_bodies() {
        let mock = MockPageSource::new().with_page("https://example.com/a", "<html></html>");

        let body = mock.fetch("https://example.com/a").await.unwrap();
        assert_eq!(body, Some("<html></html>".to_string()));

        let missing = mock.fetch("https://example.com/missing").await.unwrap();
        assert_eq!(missing, None);

        assert_eq!(mock.fetch_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_page_source_failing_url() {
        let mock = MockPageSource::new().with_failing("https://example.com/down");

        let result = mock.fetch("https://example.com/down").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_completion_records_requests() {
        let mock = MockCompletion::new().with_reply("a fair price is $10");

        let request = CompletionRequest::new("test-model", "some prompt");
        let text = mock.complete(request).await.unwrap();

        assert_eq!(text, "a fair price is $10");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.requests()[0].prompt, "some prompt");
    }
}
