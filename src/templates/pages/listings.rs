use crate::domain::{Listing, ListingFilter};
use crate::templates::components::{
    empty_results, error_placeholder, filter_form, listing_card, loading_placeholder,
};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

const LOADING_REFRESH_SECS: u32 = 2;

/// What goes where the card grid would be.
pub enum GridState<'a> {
    Loading,
    Failed,
    Ready {
        listings: Vec<&'a Listing>,
        total: usize,
        fetched_at: DateTime<Utc>,
    },
}

pub fn listings_page(filter: &ListingFilter, grid: &GridState<'_>) -> Markup {
    let refresh = matches!(grid, GridState::Loading).then_some(LOADING_REFRESH_SECS);

    desktop_layout(
        "Available Rentals",
        refresh,
        html! {
            h1 class="page-title" { "Available Rentals" }

            (filter_form(filter))

            @match grid {
                GridState::Loading => { (loading_placeholder()) },
                GridState::Failed => { (error_placeholder()) },
                GridState::Ready { listings, total, fetched_at } => {
                    (results_bar(filter, listings.len(), *total, fetched_at))
                    @if listings.is_empty() {
                        (empty_results())
                    } @else {
                        section class="card-grid" {
                            @for (index, listing) in listings.iter().enumerate() {
                                (listing_card(listing, index))
                            }
                        }
                    }
                },
            }
        },
    )
}

fn results_bar(
    filter: &ListingFilter,
    shown: usize,
    total: usize,
    fetched_at: &DateTime<Utc>,
) -> Markup {
    let query = filter.to_query();

    html! {
        div class="results-bar" {
            p class="results-count" {
                "Showing " strong { (shown) } " of " (total) " listings"
            }
            p class="results-meta" {
                "Updated " (fetched_at.format("%Y-%m-%d %H:%M UTC").to_string())
                " · "
                a href={ "/listings.xlsx?" (query) } { "Download .xlsx" }
                " · "
                a href={ "/listings.json?" (query) } { "JSON" }
            }
        }
    }
}
