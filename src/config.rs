//! Runtime settings
//!
//! Settings are assembled from CLI flags and the environment, then validated
//! once at startup so the rest of the app can trust them.

use crate::cli::Cli;
use crate::error::{BundleError, Result};
use std::time::Duration;

/// Default product-search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://stageapi.monkcommerce.app/task/products/search";

/// Demo credential for the staging endpoint; override with --api-key or
/// BUNDLETUI_API_KEY
const DEFAULT_API_KEY: &str = "72njgfa948d9aS7gs5";

/// Validated application settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Product-search endpoint URL
    pub endpoint: String,
    /// Credential sent as the x-api-key header
    pub api_key: String,
    /// Page size for catalog searches
    pub page_limit: usize,
    /// How long the picker search box must be stable before a fetch is issued
    pub debounce: Duration,
}

impl Settings {
    /// Build and validate settings from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let endpoint = cli.endpoint.trim().to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(BundleError::validation(format!(
                "endpoint must be an http(s) URL: {endpoint}"
            )));
        }
        if cli.limit == 0 {
            return Err(BundleError::validation("page limit must be at least 1"));
        }

        Ok(Self {
            endpoint,
            api_key: cli
                .api_key
                .clone()
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            page_limit: cli.limit,
            debounce: Duration::from_millis(cli.debounce_ms),
        })
    }
}
