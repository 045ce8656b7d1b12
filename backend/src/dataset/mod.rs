//! Dataset module: loading, configuration and the process-wide table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, binaries, tests)     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ get_dataset()
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Global Dataset (OnceLock<Arc<Dataset>>)                │
//! │  - initialized once at startup                           │
//! │  - read-only afterwards, shared without locking          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ init_dataset()
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Loader (loader.rs) - CSV via Polars, schema check       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no reload: once installed, the dataset lives for the process.

pub mod config;
pub mod loader;
pub mod table;

pub use config::EngineConfig;
pub use loader::{load_dataset, load_records, REQUIRED_COLUMNS};
pub use table::Dataset;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Global dataset instance initialized once per process.
static DATASET: OnceLock<Arc<Dataset>> = OnceLock::new();

/// Load the CSV at `path` and install it as the global dataset.
///
/// A second call is a no-op; the first installed dataset wins.
pub fn init_dataset(path: &Path) -> Result<()> {
    if DATASET.get().is_some() {
        return Ok(());
    }

    let dataset = load_dataset(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    let _ = DATASET.set(Arc::new(dataset));
    Ok(())
}

/// Install an already-built dataset as the global one.
///
/// Returns `false` when a dataset was already installed.
pub fn install_dataset(dataset: Dataset) -> bool {
    DATASET.set(Arc::new(dataset)).is_ok()
}

/// Get a reference to the global dataset.
pub fn get_dataset() -> Result<&'static Arc<Dataset>> {
    DATASET
        .get()
        .context("Dataset not initialized. Call init_dataset() first.")
}
