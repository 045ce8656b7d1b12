//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::error::EngineResult;
use crate::models::FilterSelection;
use crate::routes::{self, ViewResult};
use crate::services::cache::AggregateCache;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset, read-only for the lifetime of the server
    pub dataset: Arc<Dataset>,
    /// Result cache, present when enabled in configuration
    pub cache: Option<Arc<AggregateCache>>,
}

impl AppState {
    /// Create a new application state without a result cache.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<AggregateCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Run a view query, through the cache when one is configured.
    pub fn query(&self, key: &str, selections: &FilterSelection) -> EngineResult<Arc<ViewResult>> {
        match &self.cache {
            Some(cache) => routes::route_cached(&self.dataset, cache, key, selections),
            None => routes::route(&self.dataset, key, selections).map(Arc::new),
        }
    }
}
