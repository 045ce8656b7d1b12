use super::view::ViewDefinition;
use crate::models::{Field, NumericField};

/// Route key for the insurance provider analysis view
pub const INSURANCE_PROVIDER_ANALYSIS: &str = "insurance_provider_analysis";

/// Billing by insurance provider, filtered by gender and admission type.
pub static VIEW: ViewDefinition = ViewDefinition {
    key: INSURANCE_PROVIDER_ANALYSIS,
    title: "Insurance Provider Analysis",
    dimension: Field::InsuranceProvider,
    measure: NumericField::BillingAmount,
    filters: &[Field::Gender, Field::AdmissionType],
};
