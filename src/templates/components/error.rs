use crate::errors::ServerError;
use crate::templates::components::status::LOAD_ERROR_MESSAGE;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use tracing::{error, warn};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    if status >= 500 {
        error!(status, error = %err, "request failed");
    } else {
        warn!(status, error = %err, "request rejected");
    }

    match err {
        ServerError::NotFound => render_error(status, "Not Found"),
        ServerError::MethodNotAllowed => render_error(status, "Method Not Allowed"),
        ServerError::Unavailable => render_error(status, LOAD_ERROR_MESSAGE),
        ServerError::XlsxError(_) | ServerError::InternalError => {
            render_error(status, "Internal Server Error")
        }
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        None,
        html! {
            section class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
