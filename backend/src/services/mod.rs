//! Computation layer between the loaded dataset and the view router.
//!
//! Filtering narrows the full dataset to a subset, aggregation turns a subset
//! into per-group summaries and counts, and the cache memoizes whole view
//! results. Nothing here mutates the dataset.

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod options;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregate::{aggregate, AggregateResult, BoxSummary, GroupCount, GroupSummary};
pub use cache::{AggregateCache, CacheKey, CacheStats};
pub use filter::{filter, filter_resolved, filter_rows, Subset};
pub use options::{filter_options, FilterOption, FilterOptions};
