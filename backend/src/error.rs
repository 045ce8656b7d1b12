//! Error types for the filtering and aggregation engine.
//!
//! Startup errors (`SchemaMismatch`, `MissingValue`, `OutOfRangeValue`, `Load`)
//! stop initialization. Query errors (`UnknownViewKey`, `UnknownFilterField`)
//! are returned to the caller as typed failures. An empty filter result is not
//! an error.

use std::fmt;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// A single record whose numeric value has no matching bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfRange {
    /// Zero-based row index in the dataset
    pub row: usize,
    /// The offending value, `None` when the cell was null
    pub value: Option<f64>,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "row {}: {}", self.row, v),
            None => write!(f, "row {}: null", self.row),
        }
    }
}

fn join_violations(violations: &[OutOfRange]) -> String {
    const SHOWN: usize = 10;
    let mut parts: Vec<String> = violations.iter().take(SHOWN).map(|v| v.to_string()).collect();
    if violations.len() > SHOWN {
        parts.push(format!("... {} more", violations.len() - SHOWN));
    }
    parts.join(", ")
}

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The data source lacks one or more required columns.
    #[error("Schema mismatch: missing required column(s) {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A required cell is null.
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// One or more records fall outside every bucket.
    #[error(
        "{} value(s) in '{field}' outside the bucket range: {}",
        .violations.len(),
        join_violations(.violations)
    )]
    OutOfRangeValue {
        field: String,
        violations: Vec<OutOfRange>,
    },

    /// The selection names a field the active view does not declare.
    #[error("Unknown filter field '{field}' for view '{view}'")]
    UnknownFilterField { view: String, field: String },

    /// No view is registered under this key.
    #[error("Unknown view key '{0}'")]
    UnknownViewKey(String),

    /// The bucket edges or labels are malformed.
    #[error("Invalid bucket definition: {0}")]
    InvalidBuckets(String),

    /// Reading or parsing the data source failed.
    #[error("Failed to load dataset: {0}")]
    Load(String),
}

impl EngineError {
    /// Whether this error originates from a caller passing a key outside the registry.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownFilterField { .. } | EngineError::UnknownViewKey(_)
        )
    }
}

impl From<polars::prelude::PolarsError> for EngineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        EngineError::Load(err.to_string())
    }
}
