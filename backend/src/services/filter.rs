//! Filter evaluation.
//!
//! Predicates are conjunctive across non-wildcard fields. A value that never
//! occurs in the dataset matches nothing and yields an empty subset rather than
//! an error. Evaluation is a single pass over row indices; record storage is
//! never copied.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::EngineResult;
use crate::models::{Field, FilterSelection, Selection};
use crate::routes::view::{ResolvedFilters, ViewDefinition};

/// Row indices of the dataset rows that passed a filter, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subset {
    rows: Vec<usize>,
}

impl Subset {
    /// Every row of the dataset.
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            rows: (0..dataset.len()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrow this subset by one more constraint.
    pub fn refine(&self, dataset: &Dataset, field: Field, selection: &Selection) -> Self {
        match resolve_code(dataset, field, selection) {
            Constraint::Any => self.clone(),
            Constraint::Never => Self::empty(),
            Constraint::Code(code) => {
                let codes = dataset.dimension(field).codes();
                Self {
                    rows: self
                        .rows
                        .iter()
                        .copied()
                        .filter(|&row| codes[row] == code)
                        .collect(),
                }
            }
        }
    }
}

enum Constraint {
    Any,
    Never,
    Code(usize),
}

fn resolve_code(dataset: &Dataset, field: Field, selection: &Selection) -> Constraint {
    match selection {
        Selection::Any => Constraint::Any,
        Selection::Value(value) => match dataset.dimension(field).code_of(value) {
            Some(code) => Constraint::Code(code),
            None => Constraint::Never,
        },
    }
}

/// Evaluate `constraints` against the full dataset.
///
/// The order of constraints does not affect the result.
pub fn filter_rows(dataset: &Dataset, constraints: &[(Field, Selection)]) -> Subset {
    let mut active: Vec<(&[usize], usize)> = Vec::with_capacity(constraints.len());
    for (field, selection) in constraints {
        match resolve_code(dataset, *field, selection) {
            Constraint::Any => {}
            Constraint::Never => return Subset::empty(),
            Constraint::Code(code) => active.push((dataset.dimension(*field).codes(), code)),
        }
    }

    let rows = (0..dataset.len())
        .filter(|&row| active.iter().all(|(codes, code)| codes[row] == *code))
        .collect();

    Subset { rows }
}

/// Evaluate a selection already validated against a view.
pub fn filter_resolved(dataset: &Dataset, filters: &ResolvedFilters) -> Subset {
    let constraints: Vec<(Field, Selection)> = filters
        .iter()
        .map(|f| (f.field, f.value.clone()))
        .collect();
    filter_rows(dataset, &constraints)
}

/// Whether any filter names a value that never occurs in the dataset.
pub fn has_unknown_value(dataset: &Dataset, filters: &ResolvedFilters) -> bool {
    filters
        .iter()
        .any(|f| matches!(resolve_code(dataset, f.field, &f.value), Constraint::Never))
}

/// Validate `selections` against `view` and evaluate them.
///
/// Fails with `UnknownFilterField` when a key is not declared by the view.
pub fn filter(
    dataset: &Dataset,
    view: &ViewDefinition,
    selections: &FilterSelection,
) -> EngineResult<Subset> {
    let filters = view.resolve(selections)?;
    Ok(filter_resolved(dataset, &filters))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
