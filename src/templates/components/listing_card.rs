use crate::domain::Listing;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing, index: usize) -> Markup {
    html! {
        article class="listing-card" {
            h4 class="listing-title" {
                @if listing.has_link() {
                    a href=(listing.link) target="_blank" rel="noopener noreferrer" { (listing.title) }
                } @else {
                    (listing.title)
                }
            }

            @if listing.has_image() {
                a href=(listing.link) target="_blank" rel="noopener noreferrer" {
                    img
                        class="listing-image"
                        src=(listing.image)
                        alt=(alt_text(listing, index))
                        loading="lazy";
                }
            }

            div class="listing-text" {
                h3 class="listing-price" { (listing.price_text) }
                h2 class="listing-address" { (listing.address) }
                h5 class="listing-features" {
                    "Beds: " (listing.beds_text)
                    span class="sep" { "|" }
                    "Baths: " (listing.baths_text)
                    span class="sep" { "|" }
                    "Cars: " (listing.cars_text)
                    span class="sep" { "|" }
                    "Size: " (listing.size)
                }
                h6 class="listing-description" { (listing.description) }
            }
        }
    }
}

fn alt_text(listing: &Listing, index: usize) -> String {
    if listing.address.is_empty() {
        format!("Photo of listing {}", index + 1)
    } else {
        format!("Photo of {}", listing.address)
    }
}
