//! Domain types for listing analysis.

use serde::{Deserialize, Serialize};

/// A single marketplace listing as scraped from a results page.
///
/// Ephemeral: produced per parse call, never persisted, and carries no
/// identity beyond its position in the parsed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing title text
    pub title: String,

    /// Price exactly as displayed (e.g., "$123.45", "Free")
    pub price_text: String,
}

impl Listing {
    /// Create a new listing.
    pub fn new(title: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price_text: price_text.into(),
        }
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Arithmetic mean of the parsed sold prices (0.0 when none parsed)
    pub average_sold_price: f64,

    /// Raw text returned by the completion API
    pub analysis_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_constructor() {
        let listing = Listing::new("Widget A", "$10.00");
        assert_eq!(listing.title, "Widget A");
        assert_eq!(listing.price_text, "$10.00");
    }
}
