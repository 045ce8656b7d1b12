//! Dropdown choices for a view's filter fields.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::models::{Field, WILDCARD};
use crate::routes::ViewDefinition;

/// One dropdown entry: display label and the wire value sent back on select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// All choices for one filter field. The wildcard comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub field: Field,
    pub label: &'static str,
    pub options: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.value.as_str())
    }
}

fn options_for(dataset: &Dataset, field: Field) -> FilterOptions {
    let wildcard = FilterOption {
        label: field.wildcard_label().to_string(),
        value: WILDCARD.to_string(),
    };
    let values = dataset.distinct_values(field).iter().map(|v| FilterOption {
        label: v.clone(),
        value: v.clone(),
    });

    FilterOptions {
        field,
        label: field.column(),
        options: std::iter::once(wildcard).chain(values).collect(),
    }
}

/// Options for every filter `view` declares, in declaration order.
pub fn filter_options(dataset: &Dataset, view: &ViewDefinition) -> Vec<FilterOptions> {
    view.filters
        .iter()
        .map(|&field| options_for(dataset, field))
        .collect()
}
