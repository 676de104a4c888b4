pub mod error;
pub mod filter_form;
pub mod listing_card;
pub mod status;

pub use error::html_error_response;
pub use filter_form::filter_form;
pub use listing_card::listing_card;
pub use status::{empty_results, error_placeholder, loading_placeholder};
