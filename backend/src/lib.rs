//! # Patient Insights
//!
//! Filtering and aggregation engine over a tabular patient dataset.
//!
//! The dataset is loaded once from CSV, each record gets a derived age group,
//! and a small registry of analysis views answers queries of the form
//! "group by this dimension, summarize billing, under these filters". Results
//! come back as plain data (per-group five-number summaries and counts) ready
//! for any charting layer.
//!
//! ## Architecture
//!
//! - [`models`]: records, fields, bucket definitions, filter selections
//! - [`dataset`]: CSV loading, configuration and the process-wide table
//! - [`services`]: filtering, aggregation, result cache, dropdown options
//! - [`routes`]: the view registry and router
//! - [`api`]: serializable types returned to callers
//! - [`http`]: Axum REST server (feature `http-server`)
//!
//! ## Example
//!
//! ```no_run
//! use patient_insights::dataset::load_dataset;
//! use patient_insights::models::FilterSelection;
//! use patient_insights::routes;
//! use std::path::Path;
//!
//! let dataset = load_dataset(Path::new("healthcare_dataset.csv"))?;
//! let selection = FilterSelection::new().with("gender", "Female");
//! let view = routes::route(&dataset, "age_analysis", &selection)?;
//! println!("{}", view.titles.counts);
//! # Ok::<(), patient_insights::EngineError>(())
//! ```

pub mod api;
pub mod dataset;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{EngineError, EngineResult, OutOfRange};
