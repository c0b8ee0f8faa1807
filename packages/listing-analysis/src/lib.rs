//! Marketplace Listing Analysis Library
//!
//! Fetches sold and live listing pages from a marketplace search
//! endpoint, scrapes title/price pairs out of the result markup,
//! averages the sold prices, and asks a text-completion API for a fair
//! price estimate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use completion_client::CompletionClient;
//! use listing_analysis::{HttpPageSource, ListingAnalyzer};
//!
//! let analyzer = ListingAnalyzer::new(HttpPageSource::new(), CompletionClient::from_env()?);
//! let report = analyzer.analyze("iphone 13", false).await?;
//! ```
//!
//! # Modules
//!
//! - [`search_url`] - sold/live search URL construction
//! - [`fetcher`] - HTTP page source
//! - [`parser`] - listing scraping from result markup
//! - [`price`] - price text parsing and averaging
//! - [`prompt`] - completion prompt construction
//! - [`analyzer`] - the orchestrator tying it all together
//! - [`testing`] - mock implementations for tests

pub mod analyzer;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod price;
pub mod prompt;
pub mod search_url;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use analyzer::{ListingAnalyzer, DEFAULT_COMPLETION_MODEL};
pub use error::{AnalysisError, FetchError};
pub use fetcher::HttpPageSource;
pub use parser::{parse_listings, PLACEHOLDER_TITLE};
pub use price::{average, extract_price};
pub use prompt::{format_price_prompt, SAMPLE_LISTING_LIMIT};
pub use search_url::{SearchUrls, SEARCH_BASE_URL};
pub use traits::{CompletionBackend, PageSource};
pub use types::{AnalysisReport, Listing};
