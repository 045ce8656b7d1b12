//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the view
//! router and services for the actual work.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::dto::{HealthResponse, ViewListResponse, ViewOptionsResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::FilterSelection;
use crate::routes::{self, landing, ViewResult};
use crate::services::options::filter_options;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/views
///
/// List every registered view in registry order.
pub async fn list_views() -> HandlerResult<ViewListResponse> {
    Ok(Json(ViewListResponse::new(landing::list_views())))
}

/// GET /v1/views/{key}?gender=Female&blood_type=All
///
/// Filter the dataset with the query parameters and aggregate by the view's
/// dimension. Parameters the view does not declare are rejected.
pub async fn get_view(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> HandlerResult<Arc<ViewResult>> {
    let selections = FilterSelection::from_pairs(params);

    // Aggregation is CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || state.query(&key, &selections))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(result))
}

/// GET /v1/views/{key}/options
///
/// Dropdown options for each filter of the view, wildcard first.
pub async fn get_view_options(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> HandlerResult<ViewOptionsResponse> {
    let view = routes::lookup(&key)?;
    Ok(Json(ViewOptionsResponse {
        view: view.key,
        filters: filter_options(&state.dataset, view),
    }))
}

/// Fallback for unmatched paths: the view listing.
pub async fn home() -> HandlerResult<ViewListResponse> {
    list_views().await
}
