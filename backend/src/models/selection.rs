use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire value meaning "no constraint".
pub const WILDCARD: &str = "All";

/// A choice for one filter field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selection {
    /// Matches every row.
    Any,
    /// Matches rows whose field equals this value exactly.
    Value(String),
}

impl Selection {
    /// Parse a wire value; `"All"` is the wildcard.
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD {
            Selection::Any
        } else {
            Selection::Value(value.to_string())
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => WILDCARD,
            Selection::Value(v) => v,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Any
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selection::parse(&raw))
    }
}

/// Caller-supplied filter choices, keyed by field key (e.g. `"gender"`).
///
/// Keys are not validated here; a view checks them against its declared
/// fields before any row is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    fields: BTreeMap<String, Selection>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, selection: impl Into<Selection>) -> Self {
        self.fields.insert(key.into(), selection.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, selection: Selection) {
        self.fields.insert(key.into(), selection);
    }

    /// Build from raw wire pairs such as query-string parameters.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Selection::parse(v.as_ref())))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Selection> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
