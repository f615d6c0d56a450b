//! HTTP route handlers for the log server.
//!
//! Handlers support both binary protobuf (`application/protobuf`) and
//! ProtoJSON (`application/protobuf+json`) formats.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use super::error::ApiError;
use super::metrics::Metrics;
use super::proto::{ConsumeResponse, ProduceResponse};
use super::request::{ConsumeRequest, ProduceRequest};
use super::response::{ApiResponse, ResponseFormat, to_api_response};
use crate::reader::LogRead;
use crate::{Error, Log};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Log>,
    pub metrics: Arc<Metrics>,
}

/// Handle POST /
///
/// Appends the request's record and returns the assigned offset.
/// Returns response in format matching the `Accept` header.
pub async fn handle_produce(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse, ApiError> {
    let format = ResponseFormat::from_headers(&headers);

    // Parse request body based on Content-Type
    let request = ProduceRequest::from_body(&headers, &body)?;
    let size = request.record.value.len();

    let offset = state.log.append(request.record).await?;

    state.metrics.log_append_records_total.inc();
    state.metrics.log_append_bytes_total.inc_by(size as u64);
    state.metrics.log_records.inc();

    let response = ProduceResponse::success(offset);
    Ok(to_api_response(response, format)?)
}

/// Handle GET /
///
/// Returns the record at the requested offset, or 404 if the offset has not
/// been assigned yet. Returns response in format matching the `Accept` header.
pub async fn handle_consume(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse, ApiError> {
    let format = ResponseFormat::from_headers(&headers);

    let request = ConsumeRequest::from_body(&headers, &body)?;

    let record = match state.log.read(request.offset).await {
        Ok(record) => record,
        Err(err @ Error::OffsetNotFound(_)) => {
            state.metrics.log_read_not_found_total.inc();
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    state.metrics.log_read_records_total.inc();
    state
        .metrics
        .log_read_bytes_total
        .inc_by(record.value.len() as u64);

    let response = ConsumeResponse::success(record.into());
    Ok(to_api_response(response, format)?)
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.metrics.encode()
}

/// Handle GET /-/healthy - returns 200 OK if service is running
pub async fn handle_healthy() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Handle GET /-/ready - returns 200 OK if service is ready to serve requests
pub async fn handle_ready(State(_state): State<AppState>) -> (StatusCode, &'static str) {
    // The log is constructed before the server starts, so a running server is ready.
    (StatusCode::OK, "OK")
}
