//! Listing parser for marketplace search result pages.

use scraper::{Html, Selector};
use tracing::debug;

use crate::types::Listing;

/// Title of the promotional placeholder entry the marketplace injects
/// into result pages.
pub const PLACEHOLDER_TITLE: &str = "Shop on eBay";

/// Parse the title/price pairs out of a search results page.
///
/// Titles come from `div.s-item__title` containers (the text of the first
/// nested `span`; containers without one are skipped). Prices come from
/// `span.s-item__price` elements, selected independently. The i-th title
/// is paired with the i-th price; a markup omission on either side shifts
/// the pairing for everything after it.
pub fn parse_listings(html: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);

    let mut titles: Vec<String> = Vec::new();
    if let (Ok(title_sel), Ok(span_sel)) =
        (Selector::parse("div.s-item__title"), Selector::parse("span"))
    {
        for container in document.select(&title_sel) {
            if let Some(span) = container.select(&span_sel).next() {
                titles.push(span.text().collect::<String>());
            }
        }
    }

    let mut prices: Vec<String> = Vec::new();
    if let Ok(price_sel) = Selector::parse("span.s-item__price") {
        for elem in document.select(&price_sel) {
            prices.push(elem.text().collect::<String>());
        }
    }

    debug!(
        titles = titles.len(),
        prices = prices.len(),
        "listing page parsed"
    );

    titles
        .into_iter()
        .zip(prices)
        .map(|(title, price_text)| Listing::new(title, price_text))
        .collect()
}
