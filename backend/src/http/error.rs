//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Internal server error
    Internal(String),
    /// Engine error, mapped by kind
    Engine(EngineError),
}

fn engine_error_parts(err: &EngineError) -> (StatusCode, &'static str) {
    match err {
        EngineError::UnknownViewKey(_) => (StatusCode::NOT_FOUND, "UNKNOWN_VIEW"),
        EngineError::UnknownFilterField { .. } => (StatusCode::BAD_REQUEST, "UNKNOWN_FILTER_FIELD"),
        EngineError::SchemaMismatch { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "SCHEMA_MISMATCH"),
        EngineError::MissingValue { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "MISSING_VALUE"),
        EngineError::OutOfRangeValue { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "OUT_OF_RANGE"),
        EngineError::InvalidBuckets(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_BUCKETS"),
        EngineError::Load(_) => (StatusCode::INTERNAL_SERVER_ERROR, "LOAD_ERROR"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Engine(e) => {
                let (status, code) = engine_error_parts(&e);
                let mut body = ApiError::new(code, e.to_string());
                if let EngineError::UnknownFilterField { view, .. } = &e {
                    let declared = crate::routes::lookup(view)
                        .map(|v| v.filters.iter().map(|f| f.key()).collect::<Vec<_>>().join(", "))
                        .unwrap_or_default();
                    body = body.with_details(format!("Declared filters: {}", declared));
                }
                if status.is_server_error() {
                    tracing::error!("{}", e);
                }
                (status, body)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError::Engine(err)
    }
}
