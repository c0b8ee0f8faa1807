//! Analysis orchestrator.

use tracing::{debug, info};

use completion_client::CompletionRequest;

use crate::error::{AnalysisError, Result};
use crate::parser::{parse_listings, PLACEHOLDER_TITLE};
use crate::price::{average, extract_price};
use crate::prompt::format_price_prompt;
use crate::search_url::SearchUrls;
use crate::traits::{CompletionBackend, PageSource};
use crate::types::AnalysisReport;

/// Default model for the pricing completion.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Maximum tokens requested from the completion API.
const COMPLETION_MAX_TOKENS: u32 = 150;

/// Runs one search phrase through the full pipeline: fetch sold and live
/// result pages, scrape listings, average the sold prices, and ask the
/// completion API for a price estimate.
///
/// Both dependencies are injected at construction; there is no process
/// global or ambient credential state.
///
/// # Example
///
/// ```rust,ignore
/// use completion_client::CompletionClient;
/// use listing_analysis::{HttpPageSource, ListingAnalyzer};
///
/// let analyzer = ListingAnalyzer::new(HttpPageSource::new(), CompletionClient::from_env()?);
/// let report = analyzer.analyze("iphone 13", false).await?;
/// println!("${:.2}: {}", report.average_sold_price, report.analysis_text);
/// ```
pub struct ListingAnalyzer<S, C> {
    pages: S,
    completion: C,
    model: String,
}

impl<S: PageSource, C: CompletionBackend> ListingAnalyzer<S, C> {
    /// Create an analyzer over a page source and a completion backend.
    pub fn new(pages: S, completion: C) -> Self {
        Self {
            pages,
            completion,
            model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Analyze a search phrase and return the price report.
    ///
    /// Fetches are sequential and nothing is retried; fetch, content, and
    /// completion failures all propagate to the caller.
    pub async fn analyze(&self, phrase: &str, new_only: bool) -> Result<AnalysisReport> {
        let urls = SearchUrls::for_query(phrase, new_only);
        info!(phrase = %phrase, sold_url = %urls.sold, live_url = %urls.live, "analysis starting");

        let sold_body = self.fetch_required(&urls.sold).await?;
        let live_body = self.fetch_required(&urls.live).await?;

        let mut sold = parse_listings(&sold_body);
        let mut live = parse_listings(&live_body);

        sold.retain(|listing| listing.title != PLACEHOLDER_TITLE);
        live.retain(|listing| listing.title != PLACEHOLDER_TITLE);

        let prices: Vec<f64> = sold
            .iter()
            .filter_map(|listing| extract_price(&listing.price_text))
            .collect();
        let average_sold_price = average(&prices);

        debug!(
            sold = sold.len(),
            live = live.len(),
            priced = prices.len(),
            average = average_sold_price,
            "listings collected"
        );

        let prompt = format_price_prompt(average_sold_price, &sold, &live);
        let request = CompletionRequest::new(self.model.as_str(), prompt)
            .max_tokens(COMPLETION_MAX_TOKENS)
            .temperature(0.0);

        let analysis_text = self.completion.complete(request).await?;
        info!(average = average_sold_price, "analysis finished");

        Ok(AnalysisReport {
            average_sold_price,
            analysis_text,
        })
    }

    /// Fetch a URL whose body the parser requires.
    async fn fetch_required(&self, url: &str) -> Result<String> {
        self.pages
            .fetch(url)
            .await?
            .ok_or_else(|| AnalysisError::NoContent {
                url: url.to_string(),
            })
    }
}
