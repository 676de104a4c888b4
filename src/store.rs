// store.rs
use crate::domain::{decode_listings, Listing};
use crate::sheets::{SheetsClient, SheetsError};
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info};

/// Listings decoded from one successful fetch.
#[derive(Debug)]
pub struct Snapshot {
    pub listings: Vec<Listing>,
    pub fetched_at: DateTime<Utc>,
    pub range: String,
}

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<Snapshot>),
    /// Detail is kept for logs; pages show a generic message.
    Failed(String),
}

/// Anything that can produce a fresh [`Snapshot`].
pub trait ListingSource: Send + Sync {
    fn fetch(&self) -> Result<Snapshot, SheetsError>;
}

impl ListingSource for SheetsClient {
    fn fetch(&self) -> Result<Snapshot, SheetsError> {
        let range = self.fetch_range()?;
        let listings = decode_listings(&range.values);

        Ok(Snapshot {
            listings,
            fetched_at: Utc::now(),
            range: range.range,
        })
    }
}

/// Shared handle to the current listings. Cheap to clone.
#[derive(Clone)]
pub struct ListingStore {
    state: Arc<RwLock<LoadState>>,
    source: Arc<dyn ListingSource>,
}

impl ListingStore {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(LoadState::Loading)),
            source,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch once and replace the current state wholesale, success or not.
    /// Returns the number of listings loaded.
    pub fn load(&self) -> Result<usize, SheetsError> {
        let result = self.source.fetch();

        let (next, outcome) = match result {
            Ok(snapshot) => {
                let count = snapshot.listings.len();
                info!(listings = count, range = %snapshot.range, "listings loaded");
                (LoadState::Ready(Arc::new(snapshot)), Ok(count))
            }
            Err(e) => {
                error!(error = %e, "listings fetch failed");
                (LoadState::Failed(e.to_string()), Err(e))
            }
        };

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
        outcome
    }

    /// Kick off the first fetch without blocking server start-up. Pages
    /// render a loading placeholder until it lands.
    pub fn spawn_initial_load(&self) -> std::thread::JoinHandle<()> {
        let store = self.clone();
        std::thread::spawn(move || {
            // outcome is already logged and recorded in the state
            let _ = store.load();
        })
    }
}
