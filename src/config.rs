//! Runtime configuration read from the environment (and `.env`, loaded by
//! `main` before this runs).

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_RANGE: &str = "hub!A1:N38";
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where and how to read the listings sheet.
#[derive(Clone)]
pub struct SheetsConfig {
    pub api_base: String,
    pub sheet_id: String,
    pub range: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl SheetsConfig {
    pub fn new(sheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sheet_id: sheet_id.into(),
            range: DEFAULT_RANGE.to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("api_base", &self.api_base)
            .field("sheet_id", &self.sheet_id)
            .field("range", &self.range)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub sheets: SheetsConfig,
}

impl AppConfig {
    /// Required:
    /// - `GOOGLE_SHEETS_API_KEY`
    /// - `SHEET_ID`
    ///
    /// Optional:
    /// - `SHEET_RANGE`: default `hub!A1:N38`
    /// - `SHEETS_API_BASE`: default `https://sheets.googleapis.com/v4`
    /// - `SHEETS_TIMEOUT_SECS`: default 30
    /// - `BIND_ADDR`: default `127.0.0.1:3000`
    /// - `MAX_WORKERS`: default 8
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            get(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let api_key = required("GOOGLE_SHEETS_API_KEY")?;
        let sheet_id = required("SHEET_ID")?;

        let range = get("SHEET_RANGE").unwrap_or_else(|| DEFAULT_RANGE.to_string());
        let api_base = get("SHEETS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let timeout_secs = parse_or(&get, "SHEETS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let max_workers = parse_or(&get, "MAX_WORKERS", DEFAULT_MAX_WORKERS)?;

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                var: "MAX_WORKERS",
                value: "0".into(),
            });
        }

        Ok(Self {
            bind_addr,
            max_workers,
            sheets: SheetsConfig {
                api_base,
                sheet_id,
                range,
                api_key,
                timeout_secs,
            },
        })
    }
}

fn parse_or<F, T>(get: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
