// SPDX-License-Identifier: MIT
//! REST error taxonomy.
//!
//! Every error leaving a handler serializes to the flat `{"error": "..."}`
//! envelope with the matching HTTP status, so clients can branch on one
//! field regardless of which endpoint failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors returned by the REST handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request failed the shared-secret check.
    #[error("Invalid API Key")]
    Forbidden,
    /// The path referenced a task id that is not in the store.
    #[error("Task not found")]
    TaskNotFound,
    /// The request body failed validation.
    #[error("{0}")]
    Validation(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
