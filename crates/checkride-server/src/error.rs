//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use checkride_store::StoreError;

/// Errors returned from request handlers, mapped to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A referenced session/exercise/observation does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request was well-formed JSON but semantically invalid.
    #[error("{0}")]
    InvalidInput(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::InvalidInput(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
