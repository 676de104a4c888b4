use crate::domain::ListingFilter;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, json_response, redirect, text_response};
use crate::responses::ResultResp;
use crate::spreadsheets::export_listings_xlsx;
use crate::store::{ListingStore, LoadState, Snapshot};
use crate::templates::pages::{listings_page, GridState};
use astra::Request;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, store: &ListingStore) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => listings(store, query),
        ("GET", "/listings.json") => listings_json(store, query),
        ("GET", "/listings.xlsx") => listings_xlsx(store, query),
        ("POST", "/refresh") => refresh(store),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/health") => text_response(200, "ok"),

        (_, "/" | "/listings.json" | "/listings.xlsx" | "/refresh" | "/static/main.css" | "/health") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn listings(store: &ListingStore, query: Option<&str>) -> ResultResp {
    let filter = ListingFilter::from_query(query);

    match store.state() {
        LoadState::Loading => html_response(listings_page(&filter, &GridState::Loading)),
        LoadState::Failed(_) => html_response(listings_page(&filter, &GridState::Failed)),
        LoadState::Ready(snapshot) => {
            let grid = GridState::Ready {
                listings: filter.apply(&snapshot.listings),
                total: snapshot.listings.len(),
                fetched_at: snapshot.fetched_at,
            };
            html_response(listings_page(&filter, &grid))
        }
    }
}

#[derive(Serialize)]
struct ListingsPayload<'a> {
    fetched_at: DateTime<Utc>,
    range: &'a str,
    count: usize,
    listings: Vec<&'a crate::domain::Listing>,
}

fn listings_json(store: &ListingStore, query: Option<&str>) -> ResultResp {
    let snapshot = ready_snapshot(store)?;
    let filter = ListingFilter::from_query(query);
    let listings = filter.apply(&snapshot.listings);

    json_response(&ListingsPayload {
        fetched_at: snapshot.fetched_at,
        range: &snapshot.range,
        count: listings.len(),
        listings,
    })
}

fn listings_xlsx(store: &ListingStore, query: Option<&str>) -> ResultResp {
    let snapshot = ready_snapshot(store)?;
    let filter = ListingFilter::from_query(query);

    export_listings_xlsx(&filter.apply(&snapshot.listings))
}

// The page shows the outcome, so a failed reload still redirects.
fn refresh(store: &ListingStore) -> ResultResp {
    let _ = store.load();
    redirect("/")
}

fn ready_snapshot(store: &ListingStore) -> Result<Arc<Snapshot>, ServerError> {
    match store.state() {
        LoadState::Ready(snapshot) => Ok(snapshot),
        LoadState::Loading | LoadState::Failed(_) => Err(ServerError::Unavailable),
    }
}
