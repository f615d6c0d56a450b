//! Mapping of log errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::proto::ErrorResponse;
use crate::Error;

/// Error response wrapper for converting [`Error`] to HTTP responses.
///
/// Each error class maps to its own status so that clients can tell a bad
/// request, a missing offset and a server fault apart.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// Status code and `errorType` label for the wrapped error.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Error::OffsetNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }

        let body = ErrorResponse::error(error_type, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}
