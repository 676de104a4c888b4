// sheets/client.rs
use crate::config::SheetsConfig;
use crate::sheets::{decode_value_range, SheetsError, ValueRange};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = concat!("sheet_listings/", env!("CARGO_PKG_VERSION"));

// Error bodies from the API can be whole HTML pages.
const MAX_ERROR_BODY: usize = 512;

pub struct SheetsClient {
    client: Client,
    cfg: SheetsConfig,
}

impl SheetsClient {
    pub fn new(cfg: SheetsConfig) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| SheetsError::Client(e.to_string()))?;

        Ok(Self { client, cfg })
    }

    pub fn range(&self) -> &str {
        &self.cfg.range
    }

    /// One GET against the values endpoint. No retries.
    pub fn fetch_range(&self) -> Result<ValueRange, SheetsError> {
        let url = values_url(&self.cfg)?;
        let start = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SheetsError::Network(e.without_url().to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| SheetsError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                range = %self.cfg.range,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "sheets request rejected"
            );
            return Err(SheetsError::Status {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        let range = decode_value_range(&text)?;

        info!(
            range = %range.range,
            major_dimension = range.major_dimension.as_deref().unwrap_or("ROWS"),
            rows = range.values.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched sheet range"
        );

        Ok(range)
    }
}

/// `{api_base}/spreadsheets/{sheet_id}/values/{range}?key={api_key}`, with
/// the sheet ID and range percent-encoded as path segments.
pub fn values_url(cfg: &SheetsConfig) -> Result<Url, SheetsError> {
    let mut url = Url::parse(&cfg.api_base).map_err(|e| SheetsError::Url(e.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| SheetsError::Url(format!("{} cannot be a base URL", cfg.api_base)))?
        .pop_if_empty()
        .extend(["spreadsheets", cfg.sheet_id.as_str(), "values", cfg.range.as_str()]);

    url.query_pairs_mut().append_pair("key", &cfg.api_key);

    Ok(url)
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
