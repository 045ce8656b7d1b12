//! Opt-in memoization of view results.
//!
//! Entries are keyed by view key and the fully resolved selection (wildcards
//! included). The dataset never reloads mid-process, so entries are never
//! invalidated. Only selections of values present in the dataset are stored,
//! which bounds the map by the product of each view's option counts.

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::routes::view::{ResolvedFilters, ViewResult};

/// Cache key: one view queried with one resolved selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    view: &'static str,
    filters: ResolvedFilters,
}

impl CacheKey {
    pub fn new(view: &'static str, filters: ResolvedFilters) -> Self {
        Self { view, filters }
    }
}

/// Hit/miss counters and current size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe result cache shared by all request handlers.
#[derive(Debug, Default)]
pub struct AggregateCache {
    entries: RwLock<HashMap<CacheKey, Arc<ViewResult>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AggregateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `key`, computing and storing it on a miss.
    ///
    /// Two threads missing the same key concurrently may both compute; the
    /// first stored result wins and both return it.
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Arc<ViewResult>
    where
        F: FnOnce() -> ViewResult,
    {
        if let Some(hit) = self.entries.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed = Arc::new(compute());
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert(computed))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
