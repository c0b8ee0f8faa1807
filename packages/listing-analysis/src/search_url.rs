//! Search URL construction for the marketplace's listing pages.
//!
//! Two fixed templates: one constrained to completed/sold listings, one
//! for live listings. The only encoding applied to the search phrase is
//! the marketplace's `+` token for spaces; other characters pass through
//! as typed.

/// Base search endpoint, up to and including the keyword parameter.
pub const SEARCH_BASE_URL: &str = "https://www.ebay.com/sch/i.html?_from=R40&_nkw=";

/// Parameters restricting results to completed, sold listings.
const SOLD_LISTINGS_PARAMS: &str = "&_sacat=0&rt=nc&LH_Sold=1&LH_Complete=1";

/// Parameters for active (live) listings.
const LIVE_LISTINGS_PARAMS: &str = "&_sacat=0&rt=nc";

/// Parameter restricting results to new-condition items.
const NEW_CONDITION_PARAM: &str = "&LH_ItemCondition=1000";

/// The sold-listings and live-listings URLs for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrls {
    /// Completed/sold listings search URL
    pub sold: String,

    /// Active listings search URL
    pub live: String,
}

impl SearchUrls {
    /// Build both search URLs for a phrase.
    ///
    /// The new-condition restriction is applied when `new_only` is set, or
    /// when the phrase itself contains "new" (case-insensitive). Phrases
    /// like "New Laptop Stand" therefore restrict to new-condition items
    /// even with `new_only` false.
    pub fn for_query(phrase: &str, new_only: bool) -> Self {
        let keywords = phrase.replace(' ', "+");
        let new_condition = new_only || phrase.to_lowercase().contains("new");

        let mut sold = format!("{}{}{}", SEARCH_BASE_URL, keywords, SOLD_LISTINGS_PARAMS);
        let mut live = format!("{}{}{}", SEARCH_BASE_URL, keywords, LIVE_LISTINGS_PARAMS);

        if new_condition {
            sold.push_str(NEW_CONDITION_PARAM);
            live.push_str(NEW_CONDITION_PARAM);
        }

        Self { sold, live }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sold_url_without_condition() {
        let urls = SearchUrls::for_query("iphone 13", false);

        assert_eq!(
            urls.sold,
            "https://www.ebay.com/sch/i.html?_from=R40&_nkw=iphone+13\
             &_sacat=0&rt=nc&LH_Sold=1&LH_Complete=1"
        );
        assert!(!urls.sold.contains("LH_ItemCondition"));
        assert!(!urls.live.contains("LH_ItemCondition"));
    }

    #[test]
    fn test_live_url_without_condition() {
        let urls = SearchUrls::for_query("iphone 13", false);

        assert_eq!(
            urls.live,
            "https://www.ebay.com/sch/i.html?_from=R40&_nkw=iphone+13&_sacat=0&rt=nc"
        );
    }

    #[test]
    fn test_explicit_new_only_appends_condition_to_both() {
        let urls = SearchUrls::for_query("iphone 13", true);

        assert!(urls.sold.ends_with("&LH_ItemCondition=1000"));
        assert!(urls.live.ends_with("&LH_ItemCondition=1000"));
    }

    #[test]
    fn test_phrase_containing_new_auto_detects() {
        // Case-insensitive substring match, regardless of the explicit flag.
        let urls = SearchUrls::for_query("New Laptop Stand", false);

        assert!(urls.sold.contains("LH_ItemCondition=1000"));
        assert!(urls.live.contains("LH_ItemCondition=1000"));
    }

    #[test]
    fn test_spaces_become_plus_tokens() {
        let urls = SearchUrls::for_query("vintage camera lens", false);

        assert!(urls.sold.contains("_nkw=vintage+camera+lens&"));
    }

    #[test]
    fn test_other_characters_pass_through() {
        // No escaping beyond the space substitution.
        let urls = SearchUrls::for_query("50% off & more", false);

        assert!(urls.sold.contains("_nkw=50%+off+&+more&"));
    }
}
