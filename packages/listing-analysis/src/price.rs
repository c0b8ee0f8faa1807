//! Price parsing and averaging.

use regex::Regex;

/// Extract a decimal price from free-form price text.
///
/// Matches the first digits-dot-digits run in the string, so "$123.45 to
/// $150.00" yields 123.45. Text without a decimal point ("Free", "$50")
/// yields `None`; whole-dollar prices are intentionally not matched.
pub fn extract_price(price_text: &str) -> Option<f64> {
    let pattern = Regex::new(r"(\d+\.\d+)").ok()?;
    pattern
        .captures(price_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Arithmetic mean of a price set.
///
/// An empty set averages to 0.0; that is a defined result, not an error.
pub fn average(prices: &[f64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    prices.iter().sum::<f64>() / prices.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_price_with_trailing_text() {
        assert_eq!(extract_price("$123.45 Shipping"), Some(123.45));
    }

    #[test]
    fn test_extract_price_no_digits() {
        assert_eq!(extract_price("Free"), None);
    }

    #[test]
    fn test_extract_price_whole_dollar_unmatched() {
        // Whole-dollar prices without a decimal point are not matched.
        assert_eq!(extract_price("$50"), None);
    }

    #[test]
    fn test_extract_price_takes_first_match() {
        assert_eq!(extract_price("$10.00 to $20.00"), Some(10.00));
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[10.00, 20.00, 30.00]), 20.00);
    }

    #[test]
    fn test_average_empty_set_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }
}
