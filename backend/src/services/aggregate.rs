//! Grouped statistics over a filtered subset.
//!
//! Groups follow the canonical order of the grouping dimension (bucket order
//! for the age group, first-seen order in the full dataset otherwise), so a
//! filter never reorders or drops a category. Groups without rows are kept at
//! count 0 with no summary.
//!
//! Quartiles use linear interpolation between closest ranks: for `n` sorted
//! values the `p` quantile sits at rank `p * (n - 1)`.

use serde::Serialize;

use super::filter::Subset;
use crate::dataset::Dataset;
use crate::models::{Field, NumericField};

/// Whisker reach in units of the interquartile range.
pub const WHISKER_COEF: f64 = 1.5;

/// Five-number summary of one group, with box-plot whiskers and outliers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value within `q1 - 1.5 * IQR`, at most `q1`
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`, at least `q3`
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending
    pub outliers: Vec<f64>,
}

/// Distribution of the measure within one group; `summary` is `None` when the
/// group has no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub summary: Option<BoxSummary>,
}

/// Number of rows in one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
}

/// Both chart series of a view, in canonical group order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub dimension: Field,
    pub measure: NumericField,
    /// Rows in the filtered subset
    pub total: usize,
    pub distribution: Vec<GroupSummary>,
    pub counts: Vec<GroupCount>,
}

impl AggregateResult {
    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
    }

    pub fn summary_of(&self, label: &str) -> Option<&BoxSummary> {
        self.distribution
            .iter()
            .find(|g| g.label == label)
            .and_then(|g| g.summary.as_ref())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|c| c.label.as_str())
    }
}

/// Linear-interpolation quantile of an ascending slice.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Summarize a group of values. Returns `None` for an empty group.
pub fn five_number_summary(values: &[f64]) -> Option<BoxSummary> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = *sorted.first()?;
    let max = *sorted.last()?;
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let median = quantile_sorted(&sorted, 0.5)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;

    let reach = WHISKER_COEF * (q3 - q1);
    let (lower_fence, upper_fence) = (q1 - reach, q3 + reach);
    let inside = |v: &&f64| **v >= lower_fence && **v <= upper_fence;

    // Whiskers never reach into the box: with interpolated quartiles the
    // nearest in-fence value can sit past q1 or q3.
    let lower_whisker = sorted.iter().find(inside).map_or(q1, |v| v.min(q1));
    let upper_whisker = sorted.iter().rev().find(inside).map_or(q3, |v| v.max(q3));
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lower_fence || *v > upper_fence)
        .collect();

    Some(BoxSummary {
        min,
        q1,
        median,
        q3,
        max,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// Group `subset` by `dimension` and summarize `measure` per group.
pub fn aggregate(
    dataset: &Dataset,
    subset: &Subset,
    dimension: Field,
    measure: NumericField,
) -> AggregateResult {
    let dim = dataset.dimension(dimension);
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); dim.cardinality()];
    let mut counts = vec![0usize; dim.cardinality()];

    for &row in subset.rows() {
        let code = dim.code(row);
        counts[code] += 1;
        if let Some(v) = dataset.measure(row, measure) {
            values[code].push(v);
        }
    }

    let distribution = dim
        .labels()
        .iter()
        .zip(&values)
        .map(|(label, group)| GroupSummary {
            label: label.clone(),
            summary: five_number_summary(group),
        })
        .collect();

    let counts = dim
        .labels()
        .iter()
        .zip(counts)
        .map(|(label, count)| GroupCount {
            label: label.clone(),
            count,
        })
        .collect();

    AggregateResult {
        dimension,
        measure,
        total: subset.len(),
        distribution,
        counts,
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
