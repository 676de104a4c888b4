use crate::domain::filter::{ListingFilter, DEFAULT_MAX_PRICE};
use maud::{html, Markup};

/// GET form that round-trips the current filter through the query string.
pub fn filter_form(filter: &ListingFilter) -> Markup {
    html! {
        form class="filters" method="get" action="/" {
            div class="search-bar" {
                label class="sr-only" for="q" { "Search" }
                input
                    type="text"
                    id="q"
                    name="q"
                    class="search-input"
                    placeholder="Search by address..."
                    value=(filter.search);
            }

            div class="filter-row" {
                label for="min_price" { "Min Price:" }
                input type="number" id="min_price" name="min_price"
                    min="0" max=(DEFAULT_MAX_PRICE) step="1000" value=(filter.min_price);

                label for="max_price" { "Max Price:" }
                input type="number" id="max_price" name="max_price"
                    min="0" max=(DEFAULT_MAX_PRICE) step="1000" value=(filter.max_price);

                label for="beds" { "Bedrooms:" }
                input type="number" id="beds" name="beds" min="1" max="10" value=(filter.min_beds);

                label for="baths" { "Bathrooms:" }
                input type="number" id="baths" name="baths" min="1" max="10" value=(filter.min_baths);

                button type="submit" class="btn primary" { "Apply" }
                a href="/" class="btn" { "Reset" }
            }
        }
    }
}
