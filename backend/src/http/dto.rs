//! Data Transfer Objects for the HTTP API.
//!
//! View results and filter options are re-exported from the engine since
//! they already derive Serialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{FilterOptions, ViewLink, ViewResult};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of records in the loaded dataset
    pub records: usize,
}

/// Response for the view listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewListResponse {
    pub views: Vec<ViewLink>,
    pub total: usize,
}

impl ViewListResponse {
    pub fn new(views: Vec<ViewLink>) -> Self {
        let total = views.len();
        Self { views, total }
    }
}

/// Response for the filter options of one view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewOptionsResponse {
    pub view: &'static str,
    pub filters: Vec<FilterOptions>,
}
