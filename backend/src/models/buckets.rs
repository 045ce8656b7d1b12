//! Bucketing of a continuous column into an ordered categorical dimension.
//!
//! Bucket *i* covers the half-open range `[edges[i], edges[i + 1])`. A value
//! below the first edge, at or above the last edge, NaN or null has no bucket
//! and is reported as [`EngineError::OutOfRangeValue`]; there is no catch-all.

use serde::Serialize;

use super::dimension::Dimension;
use super::record::{NumericField, PatientRecord};
use crate::error::{EngineError, EngineResult, OutOfRange};

/// Age group edges in years.
pub const AGE_EDGES: [f64; 10] = [0.0, 18.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Age group labels, one per `[AGE_EDGES[i], AGE_EDGES[i + 1])` range.
pub const AGE_LABELS: [&str; 9] = [
    "0-18", "19-30", "31-40", "41-50", "51-60", "61-70", "71-80", "81-90", "91-100",
];

/// Ordered, contiguous, labelled numeric ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketDefinition {
    edges: Vec<f64>,
    labels: Vec<String>,
}

impl BucketDefinition {
    /// Validate and build a bucket definition.
    ///
    /// Requires at least two finite, strictly increasing edges and exactly one
    /// label per range.
    pub fn new(edges: Vec<f64>, labels: Vec<String>) -> EngineResult<Self> {
        if edges.len() < 2 {
            return Err(EngineError::InvalidBuckets(format!(
                "need at least 2 edges, got {}",
                edges.len()
            )));
        }
        if let Some(bad) = edges.iter().find(|e| !e.is_finite()) {
            return Err(EngineError::InvalidBuckets(format!(
                "edge {} is not finite",
                bad
            )));
        }
        if let Some(w) = edges.windows(2).find(|w| w[0] >= w[1]) {
            return Err(EngineError::InvalidBuckets(format!(
                "edges must be strictly increasing ({} >= {})",
                w[0], w[1]
            )));
        }
        if labels.len() != edges.len() - 1 {
            return Err(EngineError::InvalidBuckets(format!(
                "{} edges need {} labels, got {}",
                edges.len(),
                edges.len() - 1,
                labels.len()
            )));
        }

        Ok(Self { edges, labels })
    }

    /// The fixed age grouping used by the age analysis view.
    pub fn age_groups() -> Self {
        Self {
            edges: AGE_EDGES.to_vec(),
            labels: AGE_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Covered domain as `(lower inclusive, upper exclusive)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Index of the first range containing `value`.
    pub fn bucket_of(&self, value: f64) -> Option<usize> {
        self.edges
            .windows(2)
            .position(|w| w[0] <= value && value < w[1])
    }

    pub fn label_of(&self, value: f64) -> Option<&str> {
        self.bucket_of(value).map(|i| self.labels[i].as_str())
    }
}

/// Derive a bucketed dimension from a numeric column.
///
/// Every record is checked; all offending rows are reported together.
pub fn derive(
    records: &[PatientRecord],
    field: NumericField,
    buckets: &BucketDefinition,
) -> EngineResult<Dimension> {
    let mut codes = Vec::with_capacity(records.len());
    let mut violations = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let value = field.value(record);
        match value.and_then(|v| buckets.bucket_of(v)) {
            Some(code) => codes.push(code),
            None => violations.push(OutOfRange { row, value }),
        }
    }

    if !violations.is_empty() {
        log::warn!(
            "{} record(s) have '{}' outside [{}, {})",
            violations.len(),
            field.column(),
            buckets.domain().0,
            buckets.domain().1
        );
        return Err(EngineError::OutOfRangeValue {
            field: field.column().to_string(),
            violations,
        });
    }

    Ok(Dimension::from_parts(buckets.labels().to_vec(), codes))
}

#[cfg(test)]
#[path = "buckets_tests.rs"]
mod buckets_tests;
