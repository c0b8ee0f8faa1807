//! Typed errors for the listing analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

pub use completion_client::CompletionError;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("network error: {0}")]
    Network(String),
}

/// Errors that can occur during an analysis run.
///
/// Nothing here is recovered locally; every variant propagates to the
/// caller driving the analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Page fetch failed at the transport level
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The marketplace returned no usable content for a URL
    #[error("no content returned for {url}")]
    NoContent { url: String },

    /// Completion API call failed
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
