// src/domain/filter.rs

use crate::domain::listing::Listing;
use std::str::FromStr;
use url::form_urlencoded;

pub const DEFAULT_MIN_PRICE: u64 = 0;
pub const DEFAULT_MAX_PRICE: u64 = 1_000_000;
pub const DEFAULT_MIN_BEDS: u32 = 1;
pub const DEFAULT_MIN_BATHS: u32 = 1;

/// The search and threshold inputs from the listings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    pub min_price: u64,
    pub max_price: u64,
    pub min_beds: u32,
    pub min_baths: u32,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_beds: DEFAULT_MIN_BEDS,
            min_baths: DEFAULT_MIN_BATHS,
        }
    }
}

impl ListingFilter {
    /// Read `q`, `min_price`, `max_price`, `beds` and `baths` from a URL
    /// query string. Missing or unparsable numbers keep their default; a
    /// blank number means 0.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut filter = Self::default();
        let Some(query) = query else {
            return filter;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => filter.search = value.into_owned(),
                "min_price" => set_number(&mut filter.min_price, &value),
                "max_price" => set_number(&mut filter.max_price, &value),
                "beds" => set_number(&mut filter.min_beds, &value),
                "baths" => set_number(&mut filter.min_baths, &value),
                _ => {}
            }
        }

        filter
    }

    /// Inverse of [`ListingFilter::from_query`], used to carry the current
    /// filter onto export links.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.search)
            .append_pair("min_price", &self.min_price.to_string())
            .append_pair("max_price", &self.max_price.to_string())
            .append_pair("beds", &self.min_beds.to_string())
            .append_pair("baths", &self.min_baths.to_string())
            .finish()
    }

    /// All five conditions must hold: search text in title or address
    /// (case-insensitive), price within [min_price, max_price], and beds and
    /// baths at or above their thresholds.
    pub fn matches(&self, listing: &Listing) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = listing.title.to_lowercase().contains(&needle)
            || listing.address.to_lowercase().contains(&needle);

        text_match
            && listing.price >= self.min_price
            && listing.price <= self.max_price
            && listing.beds >= self.min_beds
            && listing.baths >= self.min_baths
    }

    /// Listings passing [`ListingFilter::matches`], in sheet order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}

// Form inputs arrive as "0050", " ", "abc"... Leading zeros are dropped and
// blank means 0; anything else unparsable leaves the current value alone.
fn set_number<T: FromStr>(slot: &mut T, raw: &str) {
    let trimmed = raw.trim().trim_start_matches('0');
    let normalized = if trimmed.is_empty() { "0" } else { trimmed };

    if let Ok(value) = normalized.parse() {
        *slot = value;
    }
}
