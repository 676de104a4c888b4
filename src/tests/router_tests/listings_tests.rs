// src/tests/router_tests/listings_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, failed_store, loading_store, ready_store, request,
};
use http::Method;
use scraper::{Html, Selector};

fn get_page(store: &crate::store::ListingStore, uri: &str) -> Html {
    let resp = handle(request(Method::GET, uri), store).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(resp))
}

fn select_all(doc: &Html, css: &str) -> Vec<String> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn home_renders_one_card_per_listing() {
    let store = ready_store();
    let doc = get_page(&store, "/");

    assert_eq!(
        select_all(&doc, "article.listing-card .listing-title"),
        ["Harbour view unit", "Family home", "Studio", "Terrace"]
    );

    let count = select_all(&doc, ".results-count").join("");
    assert!(count.contains("Showing 4 of 4"), "unexpected count: {count}");
}

#[test]
fn search_is_case_insensitive_on_title_or_address() {
    let store = ready_store();
    let doc = get_page(&store, "/?q=HARBOUR");

    assert_eq!(
        select_all(&doc, ".listing-title"),
        ["Harbour view unit", "Terrace"]
    );
}

#[test]
fn listing_without_price_drops_out_once_min_price_is_set() {
    let store = ready_store();

    let doc = get_page(&store, "/?min_price=1");
    let titles = select_all(&doc, ".listing-title");

    assert_eq!(titles.len(), 3);
    assert!(!titles.contains(&"Studio".to_string()));
}

#[test]
fn price_and_room_thresholds_are_inclusive() {
    let store = ready_store();

    let doc = get_page(&store, "/?min_price=800&max_price=950");
    assert_eq!(
        select_all(&doc, ".listing-title"),
        ["Harbour view unit", "Terrace"]
    );

    let doc = get_page(&store, "/?beds=3&baths=1");
    assert_eq!(select_all(&doc, ".listing-title"), ["Family home", "Terrace"]);

    let doc = get_page(&store, "/?baths=2");
    assert_eq!(select_all(&doc, ".listing-title"), ["Family home"]);
}

#[test]
fn filter_inputs_are_echoed_back() {
    let store = ready_store();
    let doc = get_page(&store, "/?q=park&min_price=0100&beds=2");

    let value = |id: &str| {
        let selector = Selector::parse(&format!("input#{id}")).unwrap();
        doc.select(&selector)
            .next()
            .and_then(|el| el.value().attr("value"))
            .map(str::to_string)
    };

    assert_eq!(value("q").as_deref(), Some("park"));
    assert_eq!(value("min_price").as_deref(), Some("100"));
    assert_eq!(value("max_price").as_deref(), Some("1000000"));
    assert_eq!(value("beds").as_deref(), Some("2"));
    assert_eq!(value("baths").as_deref(), Some("1"));
}

#[test]
fn images_render_only_when_present_and_link_out() {
    let store = ready_store();
    let doc = get_page(&store, "/");

    let images = Selector::parse("article.listing-card a[target=_blank] img").unwrap();
    assert_eq!(doc.select(&images).count(), 3);

    let links = Selector::parse("article.listing-card a").unwrap();
    for link in doc.select(&links) {
        assert_eq!(link.value().attr("rel"), Some("noopener noreferrer"));
    }
}

#[test]
fn no_matches_shows_empty_state() {
    let store = ready_store();
    let doc = get_page(&store, "/?q=nowhere");

    assert!(select_all(&doc, ".listing-card").is_empty());
    assert_eq!(
        select_all(&doc, ".status-empty"),
        ["No listings match your filters."]
    );
}

#[test]
fn loading_state_renders_placeholder_and_refreshes() {
    let store = loading_store();
    let doc = get_page(&store, "/");

    assert_eq!(select_all(&doc, ".status-loading"), ["Loading..."]);

    let refresh = Selector::parse(r#"meta[http-equiv="refresh"]"#).unwrap();
    assert_eq!(doc.select(&refresh).count(), 1);
}

#[test]
fn failed_fetch_shows_one_generic_message() {
    let store = failed_store();
    let resp = handle(request(Method::GET, "/"), &store).unwrap();
    let body = body_string(resp);
    let doc = Html::parse_document(&body);

    assert_eq!(select_all(&doc, ".status-error").len(), 1);
    assert!(select_all(&doc, ".listing-card").is_empty());
    assert!(!body.contains("API key not valid"));
}
