use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Field, FilterSelection, NumericField, Selection};
use crate::services::aggregate::AggregateResult;

// =========================================================
// View definition
// =========================================================

/// Static description of one analysis view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewDefinition {
    /// Route key, e.g. `"age_analysis"`
    pub key: &'static str,
    /// Page heading
    pub title: &'static str,
    /// Grouping dimension of both charts
    pub dimension: Field,
    /// Numeric field summarized in the distribution chart
    pub measure: NumericField,
    /// Filterable fields, in dropdown order
    pub filters: &'static [Field],
}

impl ViewDefinition {
    /// Whether `key` names one of this view's filter fields.
    pub fn declares(&self, key: &str) -> bool {
        self.filters.iter().any(|f| f.key() == key)
    }

    /// Validate a selection against the declared fields.
    ///
    /// Undeclared keys fail with `UnknownFilterField`; declared fields absent
    /// from the selection become wildcards.
    pub fn resolve(&self, selections: &FilterSelection) -> EngineResult<ResolvedFilters> {
        if let Some(unknown) = selections.keys().find(|k| !self.declares(k)) {
            return Err(EngineError::UnknownFilterField {
                view: self.key.to_string(),
                field: unknown.to_string(),
            });
        }

        let applied = self
            .filters
            .iter()
            .map(|&field| AppliedFilter {
                field,
                value: selections.get(field.key()).cloned().unwrap_or_default(),
            })
            .collect();

        Ok(ResolvedFilters(applied))
    }

    /// Chart titles for a resolved selection.
    pub fn titles(&self, filters: &ResolvedFilters) -> ChartTitles {
        let suffix = filters.describe();
        ChartTitles {
            distribution: format!(
                "{} Distribution by {} ({})",
                self.measure.column(),
                self.dimension.column(),
                suffix
            ),
            counts: format!("Count of Admissions by {} ({})", self.dimension.column(), suffix),
        }
    }
}

// =========================================================
// Resolved filters
// =========================================================

/// One declared filter field with its (possibly wildcard) selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AppliedFilter {
    pub field: Field,
    pub value: Selection,
}

/// A selection validated against a view: exactly the declared fields, in
/// declaration order, wildcards included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedFilters(Vec<AppliedFilter>);

impl ResolvedFilters {
    pub fn iter(&self) -> impl Iterator<Item = &AppliedFilter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_all_wildcard(&self) -> bool {
        self.0.iter().all(|f| f.value.is_wildcard())
    }

    /// `"Female, All"`
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|f| f.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =========================================================
// Route output
// =========================================================

/// Titles of the two charts of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTitles {
    pub distribution: String,
    pub counts: String,
}

/// Everything the presentation layer needs to draw one view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResult {
    pub view: &'static ViewDefinition,
    pub filters: ResolvedFilters,
    pub titles: ChartTitles,
    pub result: AggregateResult,
}
