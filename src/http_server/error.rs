//! Defines the custom `ApiError` type for the HTTP server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::producer::ProducerError;

/// A custom error type for the API that can be converted into an HTTP
/// response.
pub enum ApiError {
    /// An update request arrived without a `libraryEventId`.
    MissingEventId,

    /// Represents a generic internal server error.
    InternalServerError(String),
}

/// Converts a `ProducerError` into an `ApiError`.
///
/// Only errors discoverable before submission reach this conversion; delivery
/// failures are reconciled asynchronously and never map to a response.
impl From<ProducerError> for ApiError {
    fn from(err: ProducerError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

/// Implements the conversion from `ApiError` into an `axum` response.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Plain-text body, fixed by the API contract with callers.
            ApiError::MissingEventId =>
                (StatusCode::BAD_REQUEST, "Please pass the LibraryEventId").into_response(),
            ApiError::InternalServerError(err) => {
                tracing::error!("Internal server error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal server error occurred" })),
                )
                    .into_response()
            }
        }
    }
}
