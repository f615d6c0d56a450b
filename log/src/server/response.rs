//! HTTP response types for the log server.

use axum::Json;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use prost::Message;
use serde::Serialize;

use crate::Error;

/// Content type for binary protobuf.
pub(super) const CONTENT_TYPE_PROTOBUF: &str = "application/protobuf";

/// Content type for ProtoJSON.
pub(super) const CONTENT_TYPE_PROTOJSON: &str = "application/protobuf+json";

/// Check if a media type string indicates binary protobuf (not ProtoJSON).
pub(super) fn is_binary_protobuf(media_type: &str) -> bool {
    media_type.contains(CONTENT_TYPE_PROTOBUF) && !media_type.contains(CONTENT_TYPE_PROTOJSON)
}

/// Desired response format based on Accept header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Protobuf,
}

impl ResponseFormat {
    /// Determine response format from request headers.
    /// Returns Protobuf only for `application/protobuf`, not `application/protobuf+json`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let wants_protobuf = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(is_binary_protobuf)
            .unwrap_or(false);

        if wants_protobuf {
            ResponseFormat::Protobuf
        } else {
            ResponseFormat::Json
        }
    }
}

/// Response type that can be either JSON or protobuf.
pub enum ApiResponse {
    Json(Json<serde_json::Value>),
    Protobuf(Vec<u8>),
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Json(json) => json.into_response(),
            ApiResponse::Protobuf(bytes) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, CONTENT_TYPE_PROTOBUF)],
                bytes,
            )
                .into_response(),
        }
    }
}

/// Convert a proto response to ApiResponse based on format.
pub fn to_api_response<T: Message + Serialize>(
    response: T,
    format: ResponseFormat,
) -> Result<ApiResponse, Error> {
    match format {
        ResponseFormat::Json => serde_json::to_value(&response)
            .map(|value| ApiResponse::Json(Json(value)))
            .map_err(|e| Error::Internal(format!("failed to encode response: {}", e))),
        ResponseFormat::Protobuf => Ok(ApiResponse::Protobuf(response.encode_to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::super::proto;
    use super::*;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn should_default_to_json_format() {
        // given/when
        let format = ResponseFormat::from_headers(&HeaderMap::new());

        // then
        assert_eq!(format, ResponseFormat::Json);
    }

    #[test]
    fn should_select_protobuf_format_for_binary_accept() {
        // given/when
        let format = ResponseFormat::from_headers(&accept("application/protobuf"));

        // then
        assert_eq!(format, ResponseFormat::Protobuf);
    }

    #[test]
    fn should_select_json_format_for_protojson_accept() {
        // given/when
        let format = ResponseFormat::from_headers(&accept("application/protobuf+json"));

        // then
        assert_eq!(format, ResponseFormat::Json);
    }

    #[test]
    fn should_create_success_produce_response() {
        // given/when
        let response = proto::ProduceResponse::success(5);

        // then
        assert_eq!(response.status, "success");
        assert_eq!(response.offset, 5);
    }

    #[test]
    fn should_encode_produce_response_as_json() {
        // given
        let response = proto::ProduceResponse::success(42);

        // when
        let api_response = to_api_response(response, ResponseFormat::Json).unwrap();

        // then
        match api_response {
            ApiResponse::Json(Json(value)) => {
                assert_eq!(value["status"], "success");
                assert_eq!(value["offset"], 42);
            }
            ApiResponse::Protobuf(_) => panic!("expected JSON response"),
        }
    }

    #[test]
    fn should_encode_consume_response_as_protobuf() {
        // given
        let response = proto::ConsumeResponse::success(proto::Record {
            value: bytes::Bytes::from("world"),
            offset: 1,
        });

        // when
        let api_response = to_api_response(response, ResponseFormat::Protobuf).unwrap();

        // then
        match api_response {
            ApiResponse::Protobuf(body) => {
                let decoded = proto::ConsumeResponse::decode(body.as_slice()).unwrap();
                let record = decoded.record.unwrap();
                assert_eq!(record.value, bytes::Bytes::from("world"));
                assert_eq!(record.offset, 1);
            }
            ApiResponse::Json(_) => panic!("expected protobuf response"),
        }
    }
}
