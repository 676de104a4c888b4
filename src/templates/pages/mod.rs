pub mod listings;

pub use listings::{listings_page, GridState};
