//! Public API surface of the engine.
//!
//! Consolidates the serializable types a caller receives from a view query,
//! the view listing and the filter options. All of them derive `Serialize`.

pub use crate::models::{Field, NumericField, Selection, WILDCARD};
pub use crate::routes::landing::ViewLink;
pub use crate::routes::{AppliedFilter, ChartTitles, ResolvedFilters, ViewDefinition, ViewResult};
pub use crate::services::aggregate::{AggregateResult, BoxSummary, GroupCount, GroupSummary};
pub use crate::services::cache::CacheStats;
pub use crate::services::options::{FilterOption, FilterOptions};
