mod client;
mod models;
mod sheets_error;

pub use client::SheetsClient;
pub use models::{decode_value_range, ValueRange};
pub use sheets_error::SheetsError;
