use thiserror::Error;

/// Everything that can go wrong while reading the sheet. All of it ends up
/// as the same "unable to load" message in the UI; the detail is for logs.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP client build failed: {0}")]
    Client(String),

    #[error("Invalid request URL: {0}")]
    Url(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Sheets API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(String),
}
