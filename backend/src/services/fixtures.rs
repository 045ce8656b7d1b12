//! Shared in-crate test data.

use crate::dataset::Dataset;
use crate::models::PatientRecord;

#[allow(clippy::too_many_arguments)]
pub(crate) fn patient(
    age: f64,
    gender: &str,
    blood_type: &str,
    condition: &str,
    provider: &str,
    billing: f64,
    admission: &str,
    medication: &str,
) -> PatientRecord {
    PatientRecord {
        name: format!("Patient {}", billing),
        age: Some(age),
        gender: gender.to_string(),
        blood_type: blood_type.to_string(),
        medical_condition: condition.to_string(),
        insurance_provider: provider.to_string(),
        billing_amount: billing,
        admission_type: admission.to_string(),
        medication: medication.to_string(),
    }
}

/// Eight patients spread over both genders, three blood types and three providers.
///
/// | row | age | gender | blood | condition | provider | billing | admission | medication |
/// |-----|-----|--------|-------|-----------|----------|---------|-----------|------------|
/// | 0   | 17  | Female | A+    | Cancer    | Aetna    | 100     | Urgent    | Aspirin    |
/// | 1   | 18  | Male   | O-    | Diabetes  | Cigna    | 200     | Emergency | Ibuprofen  |
/// | 2   | 65  | Female | O-    | Cancer    | Aetna    | 300     | Elective  | Aspirin    |
/// | 3   | 45  | Male   | A+    | Asthma    | Medicare | 400     | Urgent    | Lipitor    |
/// | 4   | 33  | Female | B+    | Diabetes  | Cigna    | 500     | Urgent    | Ibuprofen  |
/// | 5   | 71  | Female | A+    | Cancer    | Medicare | 600     | Emergency | Aspirin    |
/// | 6   | 29  | Male   | B+    | Asthma    | Aetna    | 700     | Elective  | Paracetamol|
/// | 7   | 55  | Female | O-    | Diabetes  | Aetna    | 800     | Urgent    | Lipitor    |
pub(crate) fn sample_records() -> Vec<PatientRecord> {
    vec![
        patient(17.0, "Female", "A+", "Cancer", "Aetna", 100.0, "Urgent", "Aspirin"),
        patient(18.0, "Male", "O-", "Diabetes", "Cigna", 200.0, "Emergency", "Ibuprofen"),
        patient(65.0, "Female", "O-", "Cancer", "Aetna", 300.0, "Elective", "Aspirin"),
        patient(45.0, "Male", "A+", "Asthma", "Medicare", 400.0, "Urgent", "Lipitor"),
        patient(33.0, "Female", "B+", "Diabetes", "Cigna", 500.0, "Urgent", "Ibuprofen"),
        patient(71.0, "Female", "A+", "Cancer", "Medicare", 600.0, "Emergency", "Aspirin"),
        patient(29.0, "Male", "B+", "Asthma", "Aetna", 700.0, "Elective", "Paracetamol"),
        patient(55.0, "Female", "O-", "Diabetes", "Aetna", 800.0, "Urgent", "Lipitor"),
    ]
}

pub(crate) fn sample_dataset() -> Dataset {
    Dataset::from_records(sample_records()).unwrap()
}
