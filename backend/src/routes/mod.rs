//! View registry and router.
//!
//! Each analysis view lives in its own module with its route key constant and
//! static [`ViewDefinition`]. [`route`] looks a key up, filters the full
//! dataset and aggregates the subset on every call; [`route_cached`] does the
//! same through an [`AggregateCache`].

pub mod age;
pub mod condition;
pub mod insurance;
pub mod landing;
pub mod medication;
pub mod view;

pub use view::{AppliedFilter, ChartTitles, ResolvedFilters, ViewDefinition, ViewResult};

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::error::{EngineError, EngineResult};
use crate::models::FilterSelection;
use crate::services::aggregate::aggregate;
use crate::services::cache::{AggregateCache, CacheKey};
use crate::services::filter::{filter_resolved, has_unknown_value};

/// Every supported view, in home-page order.
pub static REGISTRY: [&ViewDefinition; 4] = [
    &age::VIEW,
    &insurance::VIEW,
    &condition::VIEW,
    &medication::VIEW,
];

/// Look up a view by route key.
pub fn lookup(key: &str) -> EngineResult<&'static ViewDefinition> {
    REGISTRY
        .iter()
        .copied()
        .find(|view| view.key == key)
        .ok_or_else(|| EngineError::UnknownViewKey(key.to_string()))
}

/// Run one view query against the full dataset.
pub fn route(
    dataset: &Dataset,
    key: &str,
    selections: &FilterSelection,
) -> EngineResult<ViewResult> {
    let view = lookup(key)?;
    let filters = view.resolve(selections)?;
    Ok(evaluate(dataset, view, filters))
}

/// Like [`route`], memoized by view key and resolved selection.
///
/// Selections naming a value absent from the dataset are evaluated but never
/// stored, so the cache holds at most one entry per combination of real
/// option values.
pub fn route_cached(
    dataset: &Dataset,
    cache: &AggregateCache,
    key: &str,
    selections: &FilterSelection,
) -> EngineResult<Arc<ViewResult>> {
    let view = lookup(key)?;
    let filters = view.resolve(selections)?;
    if has_unknown_value(dataset, &filters) {
        return Ok(Arc::new(evaluate(dataset, view, filters)));
    }
    let cache_key = CacheKey::new(view.key, filters.clone());
    Ok(cache.get_or_compute(cache_key, || evaluate(dataset, view, filters)))
}

fn evaluate(
    dataset: &Dataset,
    view: &'static ViewDefinition,
    filters: ResolvedFilters,
) -> ViewResult {
    let subset = filter_resolved(dataset, &filters);
    let result = aggregate(dataset, &subset, view.dimension, view.measure);
    log::debug!(
        "view={} filters=[{}] rows={}/{}",
        view.key,
        filters.describe(),
        subset.len(),
        dataset.len()
    );

    ViewResult {
        view,
        titles: view.titles(&filters),
        filters,
        result,
    }
}
