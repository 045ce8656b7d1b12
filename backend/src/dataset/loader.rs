//! CSV loading for the patient dataset.
//!
//! The schema is checked before any row is converted: a missing column fails
//! fast with `SchemaMismatch`, a null in a required column with `MissingValue`.
//! A null age is kept and later reported by the age bucketing.

use polars::prelude::*;
use std::path::Path;

use super::table::Dataset;
use crate::error::{EngineError, EngineResult};
use crate::models::{BucketDefinition, Field, NumericField, PatientRecord};

/// Column holding the patient name.
pub const NAME_COLUMN: &str = "Name";

/// Every column the engine reads, in source order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    NAME_COLUMN,
    "Age",
    "Gender",
    "Blood Type",
    "Medical Condition",
    "Insurance Provider",
    "Billing Amount",
    "Admission Type",
    "Medication",
];

/// Parse a CSV file into a Polars DataFrame with the engine's column types.
pub fn read_patient_csv(csv_path: &Path) -> EngineResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))
        .map_err(|e| EngineError::Load(format!("{}: {}", csv_path.display(), e)))?
        .finish()
        .map_err(|e| EngineError::Load(format!("{}: {}", csv_path.display(), e)))?;

    check_schema(&df)?;

    // Numeric columns may be inferred as i64 when no value has a decimal point,
    // and categorical columns as numbers when every value looks numeric.
    let mut lazy_df = df.lazy();
    for field in [NumericField::Age, NumericField::BillingAmount] {
        lazy_df = lazy_df.with_column(col(field.column()).cast(DataType::Float64));
    }
    for name in std::iter::once(NAME_COLUMN).chain(Field::SOURCE.iter().map(|f| f.column())) {
        lazy_df = lazy_df.with_column(col(name).cast(DataType::String));
    }

    Ok(lazy_df.collect()?)
}

/// Fail with `SchemaMismatch` listing every required column `df` lacks.
pub fn check_schema(df: &DataFrame) -> EngineResult<()> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !present.iter().any(|p| p == *c))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EngineError::SchemaMismatch { missing })
    }
}

/// Convert a typed DataFrame into patient records.
pub fn dataframe_to_records(df: &DataFrame) -> EngineResult<Vec<PatientRecord>> {
    check_schema(df)?;

    let names = df.column(NAME_COLUMN)?.str()?;
    let ages = df.column(NumericField::Age.column())?.f64()?;
    let billing = df.column(NumericField::BillingAmount.column())?.f64()?;
    let gender = df.column(Field::Gender.column())?.str()?;
    let blood_type = df.column(Field::BloodType.column())?.str()?;
    let condition = df.column(Field::MedicalCondition.column())?.str()?;
    let provider = df.column(Field::InsuranceProvider.column())?.str()?;
    let admission = df.column(Field::AdmissionType.column())?.str()?;
    let medication = df.column(Field::Medication.column())?.str()?;

    let text = |chunked: &StringChunked, column: &str, row: usize| -> EngineResult<String> {
        chunked
            .get(row)
            .map(str::to_string)
            .ok_or_else(|| EngineError::MissingValue {
                column: column.to_string(),
                row,
            })
    };

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let billing_amount = billing.get(row).ok_or_else(|| EngineError::MissingValue {
            column: NumericField::BillingAmount.column().to_string(),
            row,
        })?;

        records.push(PatientRecord {
            name: text(names, NAME_COLUMN, row)?,
            age: ages.get(row),
            gender: text(gender, Field::Gender.column(), row)?,
            blood_type: text(blood_type, Field::BloodType.column(), row)?,
            medical_condition: text(condition, Field::MedicalCondition.column(), row)?,
            insurance_provider: text(provider, Field::InsuranceProvider.column(), row)?,
            billing_amount,
            admission_type: text(admission, Field::AdmissionType.column(), row)?,
            medication: text(medication, Field::Medication.column(), row)?,
        });
    }

    Ok(records)
}

/// Parse a CSV file into patient records.
pub fn load_records(csv_path: &Path) -> EngineResult<Vec<PatientRecord>> {
    let df = read_patient_csv(csv_path)?;
    dataframe_to_records(&df)
}

/// Load a CSV file and build the dataset with the standard age groups.
pub fn load_dataset(csv_path: &Path) -> EngineResult<Dataset> {
    load_dataset_with_buckets(csv_path, BucketDefinition::age_groups())
}

pub fn load_dataset_with_buckets(
    csv_path: &Path,
    buckets: BucketDefinition,
) -> EngineResult<Dataset> {
    let records = load_records(csv_path)?;
    log::info!(
        "Loaded {} patient records from {}",
        records.len(),
        csv_path.display()
    );
    Dataset::new(records, buckets)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
