pub mod columns;
pub mod filter;
pub mod listing;
pub mod parse;

pub use filter::ListingFilter;
pub use listing::{decode_listings, Listing};
