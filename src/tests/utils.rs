use crate::sheets::SheetsError;
use crate::store::{ListingSource, ListingStore, Snapshot};
use astra::{Body, Request, Response};
use chrono::Utc;
use http::Method;
use std::io::Read;
use std::sync::Arc;

/// Serves a fixed value grid, decoded the same way a real fetch is.
pub struct StaticSource(pub Vec<Vec<String>>);

impl ListingSource for StaticSource {
    fn fetch(&self) -> Result<Snapshot, SheetsError> {
        Ok(Snapshot {
            listings: crate::domain::decode_listings(&self.0),
            fetched_at: Utc::now(),
            range: "hub!A1:N38".into(),
        })
    }
}

pub struct FailingSource;

impl ListingSource for FailingSource {
    fn fetch(&self) -> Result<Snapshot, SheetsError> {
        Err(SheetsError::Status {
            status: 403,
            body: "API key not valid".into(),
        })
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

/// Header plus four rentals, laid out in the sheet's default column order.
pub fn sample_values() -> Vec<Vec<String>> {
    vec![
        row(&[
            "Link", "Image", "Price", "Agent", "Title", "Address", "Beds", "Baths", "Cars", "Type",
            "Size", "Available", "Description",
        ]),
        row(&[
            "https://example.com/1", "https://example.com/1.jpg", "$950/wk", "Ray",
            "Harbour view unit", "1 Ocean St, Manly", "2", "1", "1", "Unit", "80m2", "",
            "Water views.",
        ]),
        row(&[
            "https://example.com/2", "", "$1,200/wk", "Ray", "Family home", "44 Park Ave, Ryde",
            "4", "2", "2", "House", "600m2", "", "Big yard.",
        ]),
        row(&[
            "https://example.com/3", "https://example.com/3.jpg", "", "Ray", "Studio",
            "9 King St, Newtown", "1", "1",
        ]),
        row(&[
            "https://example.com/4", "https://example.com/4.jpg", "$800/wk", "Ray", "Terrace",
            "7 Harbour Rd, Balmain", "3", "1", "0", "House", "210m2", "", "Renovated.",
        ]),
    ]
}

pub fn ready_store() -> ListingStore {
    let store = ListingStore::new(Arc::new(StaticSource(sample_values())));
    store.load().expect("static source never fails");
    store
}

pub fn failed_store() -> ListingStore {
    let store = ListingStore::new(Arc::new(FailingSource));
    assert!(store.load().is_err());
    store
}

pub fn loading_store() -> ListingStore {
    ListingStore::new(Arc::new(FailingSource))
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    body_bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
