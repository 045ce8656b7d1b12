use serde::Serialize;
use std::collections::HashMap;

/// A dictionary-encoded categorical column.
///
/// `labels` holds the canonical group order; `codes[row]` indexes into it.
/// For source columns the order is first appearance in the full dataset, for
/// derived columns it is the bucket order, so an empty group keeps its slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    labels: Vec<String>,
    codes: Vec<usize>,
}

impl Dimension {
    /// Encode a column, assigning codes in first-seen order.
    pub fn categorical<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut labels: Vec<String> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let codes = values
            .into_iter()
            .map(|value| {
                *index.entry(value).or_insert_with(|| {
                    labels.push(value.to_string());
                    labels.len() - 1
                })
            })
            .collect();

        Self { labels, codes }
    }

    /// Build from a fixed label axis and precomputed codes.
    ///
    /// Every code must index into `labels`.
    pub(crate) fn from_parts(labels: Vec<String>, codes: Vec<usize>) -> Self {
        debug_assert!(codes.iter().all(|&c| c < labels.len()));
        Self { labels, codes }
    }

    /// Canonical label order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    pub fn code(&self, row: usize) -> usize {
        self.codes[row]
    }

    pub fn label(&self, code: usize) -> &str {
        &self.labels[code]
    }

    /// Label assigned to a row.
    pub fn value(&self, row: usize) -> &str {
        self.label(self.code(row))
    }

    pub fn code_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Number of distinct labels.
    pub fn cardinality(&self) -> usize {
        self.labels.len()
    }

    /// Number of encoded rows.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
