use maud::{html, Markup};

/// Shown in place of the grid when the sheet could not be read. The cause
/// is logged, never displayed.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load listings right now. Please try again later.";

pub fn loading_placeholder() -> Markup {
    html! {
        p class="status status-loading" role="status" { "Loading..." }
    }
}

pub fn error_placeholder() -> Markup {
    html! {
        p class="status status-error" role="alert" { (LOAD_ERROR_MESSAGE) }
    }
}

pub fn empty_results() -> Markup {
    html! {
        p class="status status-empty" { "No listings match your filters." }
    }
}
