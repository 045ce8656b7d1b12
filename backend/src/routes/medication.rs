use super::view::ViewDefinition;
use crate::models::{Field, NumericField};

/// Route key for the medication analysis view
pub const MEDICATION_ANALYSIS: &str = "medication_analysis";

pub static VIEW: ViewDefinition = ViewDefinition {
    key: MEDICATION_ANALYSIS,
    title: "Medication Analysis",
    dimension: Field::Medication,
    measure: NumericField::BillingAmount,
    filters: &[Field::Gender, Field::InsuranceProvider],
};
