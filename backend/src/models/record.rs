use serde::{Deserialize, Serialize};

/// One row of the patient dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    /// Age in years; `None` when the source cell was null.
    pub age: Option<f64>,
    pub gender: String,
    pub blood_type: String,
    pub medical_condition: String,
    pub insurance_provider: String,
    pub billing_amount: f64,
    pub admission_type: String,
    pub medication: String,
}

/// Categorical dimensions a view can group or filter by.
///
/// `AgeGroup` is derived from [`NumericField::Age`] after load; every other
/// variant is read straight from a source column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Gender,
    BloodType,
    MedicalCondition,
    InsuranceProvider,
    AdmissionType,
    Medication,
    AgeGroup,
}

impl Field {
    /// Fields read directly from the data source, in column order.
    pub const SOURCE: [Field; 6] = [
        Field::Gender,
        Field::BloodType,
        Field::MedicalCondition,
        Field::InsuranceProvider,
        Field::AdmissionType,
        Field::Medication,
    ];

    /// Key used in filter selections and query strings.
    pub fn key(self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::BloodType => "blood_type",
            Field::MedicalCondition => "medical_condition",
            Field::InsuranceProvider => "insurance_provider",
            Field::AdmissionType => "admission_type",
            Field::Medication => "medication",
            Field::AgeGroup => "age_group",
        }
    }

    /// Column header in the data source (or the derived column name).
    pub fn column(self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::BloodType => "Blood Type",
            Field::MedicalCondition => "Medical Condition",
            Field::InsuranceProvider => "Insurance Provider",
            Field::AdmissionType => "Admission Type",
            Field::Medication => "Medication",
            Field::AgeGroup => "Age Group",
        }
    }

    /// Label of the wildcard option shown in a dropdown, e.g. "All Genders".
    pub fn wildcard_label(self) -> &'static str {
        match self {
            Field::Gender => "All Genders",
            Field::BloodType => "All Blood Types",
            Field::MedicalCondition => "All Medical Conditions",
            Field::InsuranceProvider => "All Insurance Providers",
            Field::AdmissionType => "All Admission Types",
            Field::Medication => "All Medications",
            Field::AgeGroup => "All Age Groups",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::SOURCE
            .into_iter()
            .chain(std::iter::once(Field::AgeGroup))
            .find(|f| f.key() == key)
    }

    /// Read this field from a record. Returns `None` for derived fields.
    pub fn source_value(self, record: &PatientRecord) -> Option<&str> {
        match self {
            Field::Gender => Some(&record.gender),
            Field::BloodType => Some(&record.blood_type),
            Field::MedicalCondition => Some(&record.medical_condition),
            Field::InsuranceProvider => Some(&record.insurance_provider),
            Field::AdmissionType => Some(&record.admission_type),
            Field::Medication => Some(&record.medication),
            Field::AgeGroup => None,
        }
    }
}

/// Numeric columns: bucketing sources and aggregation measures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Age,
    BillingAmount,
}

impl NumericField {
    pub fn column(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::BillingAmount => "Billing Amount",
        }
    }

    pub fn value(self, record: &PatientRecord) -> Option<f64> {
        match self {
            NumericField::Age => record.age,
            NumericField::BillingAmount => Some(record.billing_amount),
        }
    }
}
