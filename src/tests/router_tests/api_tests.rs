// src/tests/router_tests/api_tests.rs

use crate::errors::ServerError;
use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::store::{ListingStore, LoadState};
use crate::templates::html_error_response;
use crate::tests::utils::{
    body_bytes, body_string, loading_store, ready_store, request, FailingSource, StaticSource,
    sample_values,
};
use http::Method;
use serde_json::Value;
use std::sync::Arc;

#[test]
fn json_returns_filtered_listings() {
    let store = ready_store();
    let resp = handle(request(Method::GET, "/listings.json?q=harbour"), &store).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let payload: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(payload["count"], 2);
    assert_eq!(payload["range"], "hub!A1:N38");
    assert_eq!(payload["listings"][0]["title"], "Harbour view unit");
    assert_eq!(payload["listings"][0]["price"], 950);
    assert_eq!(payload["listings"][1]["price_text"], "$800/wk");
}

#[test]
fn xlsx_export_downloads_a_workbook() {
    let store = ready_store();
    let resp = handle(request(Method::GET, "/listings.xlsx?beds=3"), &store).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        XLSX_CONTENT_TYPE
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"listings.xlsx\""
    );
    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn exports_are_unavailable_until_loaded() {
    let store = loading_store();

    for uri in ["/listings.json", "/listings.xlsx"] {
        let result = handle(request(Method::GET, uri), &store);
        assert!(matches!(result, Err(ServerError::Unavailable)), "{uri}");
    }

    assert_eq!(html_error_response(ServerError::Unavailable).status(), 503);
}

#[test]
fn refresh_reloads_and_redirects_home() {
    let store = ListingStore::new(Arc::new(StaticSource(sample_values())));
    assert!(matches!(store.state(), LoadState::Loading));

    let resp = handle(request(Method::POST, "/refresh"), &store).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
    assert!(matches!(store.state(), LoadState::Ready(s) if s.listings.len() == 4));
}

#[test]
fn failed_refresh_still_redirects() {
    let store = ListingStore::new(Arc::new(FailingSource));
    let resp = handle(request(Method::POST, "/refresh"), &store).unwrap();

    assert_eq!(resp.status(), 303);
    assert!(matches!(store.state(), LoadState::Failed(_)));
}

#[test]
fn unknown_path_is_not_found() {
    let store = ready_store();
    let result = handle(request(Method::GET, "/nope"), &store);

    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(html_error_response(ServerError::NotFound).status(), 404);
}

#[test]
fn wrong_method_is_rejected() {
    let store = ready_store();

    assert!(matches!(
        handle(request(Method::GET, "/refresh"), &store),
        Err(ServerError::MethodNotAllowed)
    ));
    assert!(matches!(
        handle(request(Method::DELETE, "/"), &store),
        Err(ServerError::MethodNotAllowed)
    ));
}

#[test]
fn stylesheet_and_health_are_served() {
    let store = loading_store();

    let css = handle(request(Method::GET, "/static/main.css"), &store).unwrap();
    assert_eq!(css.status(), 200);
    assert!(body_string(css).contains(".card-grid"));

    let health = handle(request(Method::GET, "/health"), &store).unwrap();
    assert_eq!(body_string(health), "ok");
}
