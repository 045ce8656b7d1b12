use super::view::ViewDefinition;
use crate::models::{Field, NumericField};

/// Route key for the age analysis view
pub const AGE_ANALYSIS: &str = "age_analysis";

/// Billing by derived age group, filtered by gender and blood type.
pub static VIEW: ViewDefinition = ViewDefinition {
    key: AGE_ANALYSIS,
    title: "Age Analysis",
    dimension: Field::AgeGroup,
    measure: NumericField::BillingAmount,
    filters: &[Field::Gender, Field::BloodType],
};
