use std::path::PathBuf;

use anyhow::Result;

/// Default backend address used when `PREPNOVA_API_URL` is unset.
/// Matches the local dev server the shell application starts.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
/// Every variable has a usable default — a bare environment still boots.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Override for the slot-storage directory. `None` means the platform
    /// data dir (see `storage::file`).
    pub data_dir: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("PREPNOVA_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            data_dir: std::env::var("PREPNOVA_DATA_DIR").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            rust_log: "info".to_string(),
        }
    }
}
