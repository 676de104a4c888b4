use crate::config::AppConfig;
use crate::router::handle;
use crate::sheets::SheetsClient;
use crate::store::ListingStore;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod sheets;
mod spreadsheets;
mod store;
mod templates;


fn main() {
    // .env is optional; real env vars win
    let _ = dotenvy::dotenv();

    if let Err(e) = logging::init_tracing() {
        eprintln!("Logging initialization failed: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration invalid");
            std::process::exit(1);
        }
    };

    let client = match SheetsClient::new(config.sheets.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "sheets client initialization failed");
            std::process::exit(1);
        }
    };

    info!(range = client.range(), "loading listings");
    let store = ListingStore::new(Arc::new(client));
    store.spawn_initial_load();

    let addr = config.bind_addr;
    info!(%addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
