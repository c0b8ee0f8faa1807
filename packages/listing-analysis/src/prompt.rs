//! Completion prompt for price analysis.

use crate::types::Listing;

/// How many listings from each set are quoted in the prompt.
pub const SAMPLE_LISTING_LIMIT: usize = 10;

/// Prompt template for the pricing analysis.
pub const PRICE_ANALYSIS_PROMPT: &str = r#"I am going to provide you with some recent sales data and live listing data from eBay in order for you to help me price a similar item.
Make sure if the item is a lot you compare it to similar lots with a similar amount of items.
Can you analyze the following data and come up with a fair price?

Sold Listings Average Price: ${average}
Sold Listings Details:
{sold_listings}
Live Listings Details:
{live_listings}"#;

/// Format the pricing prompt with the average and listing samples.
///
/// Quotes at most [`SAMPLE_LISTING_LIMIT`] listings from each set, title
/// and price text verbatim. The average is rendered to 2 decimal places.
pub fn format_price_prompt(average: f64, sold: &[Listing], live: &[Listing]) -> String {
    PRICE_ANALYSIS_PROMPT
        .replace("{average}", &format!("{:.2}", average))
        .replace("{sold_listings}", &format_listings(sold))
        .replace("{live_listings}", &format_listings(live))
}

fn format_listings(listings: &[Listing]) -> String {
    if listings.is_empty() {
        return "(none)".to_string();
    }

    listings
        .iter()
        .take(SAMPLE_LISTING_LIMIT)
        .map(|l| format!("- {} | {}", l.title, l.price_text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_prompt_embeds_average_to_two_decimals() {
        let formatted = format_price_prompt(15.0, &[], &[]);
        assert!(formatted.contains("Sold Listings Average Price: $15.00"));
    }

    #[test]
    fn test_format_price_prompt_quotes_pairs_verbatim() {
        let sold = vec![Listing::new("Widget A", "$10.00 Shipping")];
        let live = vec![Listing::new("Widget B", "Free")];

        let formatted = format_price_prompt(10.0, &sold, &live);
        assert!(formatted.contains("- Widget A | $10.00 Shipping"));
        assert!(formatted.contains("- Widget B | Free"));
    }

    #[test]
    fn test_format_price_prompt_caps_each_set_at_ten() {
        let sold: Vec<Listing> = (0..25)
            .map(|i| Listing::new(format!("Item {}", i), "$1.00"))
            .collect();

        let formatted = format_price_prompt(1.0, &sold, &[]);
        assert!(formatted.contains("- Item 9 | $1.00"));
        assert!(!formatted.contains("- Item 10 | $1.00"));
    }

    #[test]
    fn test_empty_sets_render_placeholder() {
        let formatted = format_price_prompt(0.0, &[], &[]);
        assert!(formatted.contains("Sold Listings Details:\n(none)"));
        assert!(formatted.contains("Live Listings Details:\n(none)"));
    }
}
