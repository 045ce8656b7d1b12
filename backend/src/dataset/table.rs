//! The immutable in-memory patient table.

use crate::error::EngineResult;
use crate::models::{derive, BucketDefinition, Dimension, Field, NumericField, PatientRecord};

/// Encoded categorical columns, one per [`Field`].
#[derive(Debug, Clone)]
struct Dimensions {
    gender: Dimension,
    blood_type: Dimension,
    medical_condition: Dimension,
    insurance_provider: Dimension,
    admission_type: Dimension,
    medication: Dimension,
    age_group: Dimension,
}

impl Dimensions {
    fn get(&self, field: Field) -> &Dimension {
        match field {
            Field::Gender => &self.gender,
            Field::BloodType => &self.blood_type,
            Field::MedicalCondition => &self.medical_condition,
            Field::InsuranceProvider => &self.insurance_provider,
            Field::AdmissionType => &self.admission_type,
            Field::Medication => &self.medication,
            Field::AgeGroup => &self.age_group,
        }
    }
}

fn encode(records: &[PatientRecord], field: Field) -> Dimension {
    Dimension::categorical(
        records
            .iter()
            .map(|r| field.source_value(r).unwrap_or_default()),
    )
}

/// Patient records plus their encoded dimensions.
///
/// Built once, then only read. The age group is derived during construction
/// and never recomputed.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<PatientRecord>,
    dimensions: Dimensions,
}

impl Dataset {
    /// Build a dataset, deriving the age group with `buckets`.
    ///
    /// Fails with `OutOfRangeValue` listing every record whose age has no bucket.
    pub fn new(records: Vec<PatientRecord>, buckets: BucketDefinition) -> EngineResult<Self> {
        let age_group = derive(&records, NumericField::Age, &buckets)?;

        let dimensions = Dimensions {
            gender: encode(&records, Field::Gender),
            blood_type: encode(&records, Field::BloodType),
            medical_condition: encode(&records, Field::MedicalCondition),
            insurance_provider: encode(&records, Field::InsuranceProvider),
            admission_type: encode(&records, Field::AdmissionType),
            medication: encode(&records, Field::Medication),
            age_group,
        };

        log::debug!(
            "Dataset built: {} records, {} genders, {} providers, {} conditions, {} medications",
            records.len(),
            dimensions.gender.cardinality(),
            dimensions.insurance_provider.cardinality(),
            dimensions.medical_condition.cardinality(),
            dimensions.medication.cardinality()
        );

        Ok(Self {
            records,
            dimensions,
        })
    }

    /// Build a dataset with the standard age groups.
    pub fn from_records(records: Vec<PatientRecord>) -> EngineResult<Self> {
        Self::new(records, BucketDefinition::age_groups())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn record(&self, row: usize) -> Option<&PatientRecord> {
        self.records.get(row)
    }

    pub fn dimension(&self, field: Field) -> &Dimension {
        self.dimensions.get(field)
    }

    /// Label of `field` at `row`, including the derived age group.
    pub fn value(&self, row: usize, field: Field) -> &str {
        self.dimension(field).value(row)
    }

    /// Distinct values of `field` in canonical order.
    pub fn distinct_values(&self, field: Field) -> &[String] {
        self.dimension(field).labels()
    }

    pub fn measure(&self, row: usize, field: NumericField) -> Option<f64> {
        self.records.get(row).and_then(|r| field.value(r))
    }
}
