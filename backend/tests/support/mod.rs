#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use patient_insights::dataset::{load_dataset, Dataset};
use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Header of the public healthcare dataset, including columns the engine ignores.
pub const HEADER: &str = "Name,Age,Gender,Blood Type,Medical Condition,Date of Admission,Doctor,Hospital,Insurance Provider,Billing Amount,Room Number,Admission Type,Discharge Date,Medication,Test Results";

/// Ten admissions covering every view's filter fields.
///
/// Female rows: 0, 2, 4, 6, 8. Ages 17 and 18 straddle the first bucket edge.
pub const SAMPLE_ROWS: &[&str] = &[
    "Ann Lee,17,Female,A+,Cancer,2024-01-31,Dr A,Hospital A,Aetna,1000,101,Urgent,2024-02-02,Aspirin,Normal",
    "Bob Ray,18,Male,O-,Diabetes,2024-01-31,Dr B,Hospital B,Cigna,2000,102,Emergency,2024-02-03,Ibuprofen,Normal",
    "Cid Moe,65,Female,O-,Cancer,2024-02-01,Dr C,Hospital A,Aetna,3000,103,Elective,2024-02-05,Aspirin,Abnormal",
    "Dee Fox,45,Male,A+,Asthma,2024-02-01,Dr A,Hospital C,Medicare,4000,104,Urgent,2024-02-09,Lipitor,Normal",
    "Eve Kim,33,Female,B+,Diabetes,2024-02-02,Dr B,Hospital B,Cigna,5000,105,Urgent,2024-02-04,Ibuprofen,Inconclusive",
    "Fay Orr,71,Male,A+,Cancer,2024-02-03,Dr C,Hospital A,Medicare,6000,106,Emergency,2024-02-06,Aspirin,Normal",
    "Gil Poe,29,Female,B+,Asthma,2024-02-03,Dr A,Hospital C,Aetna,7000,107,Elective,2024-02-10,Paracetamol,Normal",
    "Hal Roe,55,Male,O-,Diabetes,2024-02-04,Dr B,Hospital B,Aetna,8000,108,Urgent,2024-02-07,Lipitor,Abnormal",
    "Ida Sun,82,Female,A+,Obesity,2024-02-05,Dr C,Hospital A,Blue Cross,9000,109,Emergency,2024-02-08,Penicillin,Normal",
    "Jon Tam,38,Male,B+,Obesity,2024-02-05,Dr A,Hospital C,Blue Cross,10000,110,Elective,2024-02-12,Penicillin,Normal",
];

/// Write `rows` under the full header into a temporary CSV file.
pub fn write_csv(rows: &[&str]) -> NamedTempFile {
    write_raw_csv(HEADER, rows)
}

/// Write `rows` under an arbitrary header.
pub fn write_raw_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{}", header).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    file.flush().expect("flush temp csv");
    file
}

/// Load [`SAMPLE_ROWS`] through the CSV loader.
pub fn sample_dataset() -> Dataset {
    let file = write_csv(SAMPLE_ROWS);
    load_dataset(file.path()).expect("load sample dataset")
}

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (including unwind) and serializes
/// access to the process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
