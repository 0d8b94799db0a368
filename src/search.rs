//! Catalog search: cache, request sequencing, and the HTTP worker
//!
//! The cache holds only the latest page for the active query (replace
//! semantics, no accumulation). Requests are tagged with a monotonically
//! increasing sequence number; responses may resolve out of request order,
//! and any response whose sequence number is not the latest issued is
//! discarded. That makes the observable effect last-issued-wins.

use crate::catalog::CatalogProduct;
use crate::config::Settings;
use crate::error::Result;
use std::sync::mpsc::Sender;
use std::thread;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Outcome of one tagged search request, delivered from a worker thread to
/// the event loop over the app's mpsc channel.
#[derive(Debug)]
pub struct SearchMessage {
    pub seq: u64,
    pub result: std::result::Result<Vec<CatalogProduct>, String>,
}

/// The most recently fetched catalog page plus the flags the UI observes
#[derive(Debug, Default)]
pub struct CatalogCache {
    products: Vec<CatalogProduct>,
    loading: bool,
    error: Option<String>,
    query: String,
    page: usize,
    latest_seq: u64,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new search as the latest issued and return its sequence
    /// number. Changing the query resets the page cursor to the first page;
    /// `page` is honored only when the query is unchanged.
    pub fn begin_search(&mut self, query: &str, page: usize) -> u64 {
        self.page = if query == self.query { page } else { 0 };
        if query != self.query {
            self.query = query.to_string();
        }
        self.latest_seq += 1;
        self.loading = true;
        debug!(seq = self.latest_seq, query = %self.query, page = self.page, "search issued");
        self.latest_seq
    }

    /// Apply a completed request. Stale responses (any seq other than the
    /// latest issued) are discarded entirely: they touch neither the result
    /// set nor the loading flag. Returns whether the message was applied.
    ///
    /// On failure the previously loaded results are kept; only the error
    /// message changes. The loading flag always clears for the latest seq.
    pub fn apply(&mut self, msg: SearchMessage) -> bool {
        if msg.seq != self.latest_seq {
            debug!(seq = msg.seq, latest = self.latest_seq, "discarding stale search response");
            return false;
        }
        self.loading = false;
        match msg.result {
            Ok(products) => {
                info!(seq = msg.seq, count = products.len(), "search page loaded");
                self.products = products;
                self.error = None;
            }
            Err(message) => {
                warn!(seq = msg.seq, error = %message, "search failed");
                self.error = Some(message);
            }
        }
        true
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

/// The endpoint answers with either a bare product array, a paged object,
/// or `null` when nothing matches.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Plain(Vec<CatalogProduct>),
    Paged { products: Vec<CatalogProduct> },
}

impl SearchResponse {
    fn into_products(self) -> Vec<CatalogProduct> {
        match self {
            Self::Plain(products) | Self::Paged { products } => products,
        }
    }
}

/// Spawns one short-lived worker thread per search request and reports back
/// over the channel. No cancellation: a superseded request runs to completion
/// and its response is discarded by [`CatalogCache::apply`].
pub struct SearchWorker {
    client: reqwest::blocking::Client,
    tx: Sender<SearchMessage>,
    endpoint: String,
    api_key: String,
    page_limit: usize,
}

impl SearchWorker {
    pub fn new(tx: Sender<SearchMessage>, settings: &Settings) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            tx,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            page_limit: settings.page_limit,
        }
    }

    /// Fire off one tagged fetch. Failures (transport, non-2xx, bad JSON)
    /// come back as a human-readable message in the channel, never a panic.
    pub fn spawn_fetch(&self, seq: u64, query: String, page: usize) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        let limit = self.page_limit;

        thread::spawn(move || {
            let result = fetch_page(&client, &endpoint, &api_key, &query, page, limit)
                .map_err(|e| e.to_string());
            // The receiver is gone when the app is shutting down; nothing to do
            let _ = tx.send(SearchMessage { seq, result });
        });
    }
}

fn fetch_page(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    api_key: &str,
    query: &str,
    page: usize,
    limit: usize,
) -> Result<Vec<CatalogProduct>> {
    let response = client
        .get(endpoint)
        .query(&[
            ("search", query),
            ("page", &page.to_string()),
            ("limit", &limit.to_string()),
        ])
        .header("x-api-key", api_key)
        .send()?
        .error_for_status()?;

    let body: Option<SearchResponse> = response.json()?;
    Ok(body.map(SearchResponse::into_products).unwrap_or_default())
}
