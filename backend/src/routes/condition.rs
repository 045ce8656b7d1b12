use super::view::ViewDefinition;
use crate::models::{Field, NumericField};

/// Route key for the medical condition analysis view
pub const MEDICAL_CONDITION_ANALYSIS: &str = "medical_condition_analysis";

/// Billing by medical condition, filtered by gender and insurance provider.
pub static VIEW: ViewDefinition = ViewDefinition {
    key: MEDICAL_CONDITION_ANALYSIS,
    title: "Medical Condition Analysis",
    dimension: Field::MedicalCondition,
    measure: NumericField::BillingAmount,
    filters: &[Field::Gender, Field::InsuranceProvider],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_shape() {
        assert_eq!(VIEW.dimension, Field::MedicalCondition);
        assert_eq!(VIEW.filters, &[Field::Gender, Field::InsuranceProvider]);
    }
}
