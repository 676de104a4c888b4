use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors raised by route handlers. Each one becomes an HTML error page
/// (see `templates::components::error`).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The sheet is still loading or the last fetch failed.
    #[error("Unable to load listings right now.")]
    Unavailable,

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::Unavailable => 503,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
