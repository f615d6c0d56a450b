//! HTTP request types for the log server.

use axum::http::{HeaderMap, header};
use prost::Message;
use serde::de::DeserializeOwned;

use super::proto;
use super::response::is_binary_protobuf;
use crate::{Error, Offset};

/// Check if the request body is protobuf based on Content-Type header.
/// Only matches `application/protobuf`, not `application/protobuf+json`.
fn is_protobuf_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(is_binary_protobuf)
        .unwrap_or(false)
}

/// Decode a proto message from the raw body based on Content-Type header.
///
/// - `application/protobuf`: Parse as binary protobuf
/// - anything else: Parse as ProtoJSON
fn decode_body<T>(headers: &HeaderMap, body: &[u8]) -> Result<T, Error>
where
    T: Message + Default + DeserializeOwned,
{
    if is_protobuf_content(headers) {
        T::decode(body).map_err(|e| Error::InvalidInput(format!("Invalid protobuf: {}", e)))
    } else {
        serde_json::from_slice(body).map_err(|e| Error::InvalidInput(format!("Invalid JSON: {}", e)))
    }
}

/// Produce request parsed from either JSON or protobuf.
#[derive(Debug)]
pub struct ProduceRequest {
    /// Record to append. Its offset is reassigned by the log.
    pub record: crate::Record,
}

impl ProduceRequest {
    /// Parse a produce request from the raw body based on Content-Type header.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, Error> {
        let proto_request: proto::ProduceRequest = decode_body(headers, body)?;
        // An absent record appends an empty value.
        let value = proto_request
            .record
            .map(|record| record.value)
            .unwrap_or_default();

        Ok(Self {
            record: crate::Record::new(value),
        })
    }
}

/// Consume request parsed from either JSON or protobuf.
#[derive(Debug)]
pub struct ConsumeRequest {
    /// Offset of the record to read.
    pub offset: Offset,
}

impl ConsumeRequest {
    /// Parse a consume request from the raw body based on Content-Type header.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, Error> {
        let proto_request: proto::ConsumeRequest = decode_body(headers, body)?;
        Ok(Self {
            offset: proto_request.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use bytes::Bytes;

    use super::*;

    fn protobuf_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/protobuf"),
        );
        headers
    }

    fn protojson_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/protobuf+json"),
        );
        headers
    }

    #[test]
    fn should_parse_produce_request_from_json() {
        // given - "hello" -> "aGVsbG8="
        let json = br#"{"record": {"value": "aGVsbG8="}}"#;

        // when
        let request = ProduceRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert_eq!(request.record.value, Bytes::from("hello"));
    }

    #[test]
    fn should_parse_produce_request_without_content_type_as_json() {
        // given
        let json = br#"{"record": {"value": "aGVsbG8="}}"#;

        // when
        let request = ProduceRequest::from_body(&HeaderMap::new(), json).unwrap();

        // then
        assert_eq!(request.record.value, Bytes::from("hello"));
    }

    #[test]
    fn should_discard_caller_offset_in_produce_request() {
        // given
        let json = br#"{"record": {"value": "aGVsbG8=", "offset": 99}}"#;

        // when
        let request = ProduceRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert_eq!(request.record.offset, 0);
    }

    #[test]
    fn should_parse_produce_request_from_protobuf() {
        // given
        let proto_request = proto::ProduceRequest {
            record: Some(proto::Record {
                value: Bytes::from("proto-value"),
                offset: 0,
            }),
        };
        let body = proto_request.encode_to_vec();

        // when
        let request = ProduceRequest::from_body(&protobuf_headers(), &body).unwrap();

        // then
        assert_eq!(request.record.value, Bytes::from("proto-value"));
    }

    #[test]
    fn should_accept_record_without_value() {
        // given
        let json = br#"{"record": {}}"#;

        // when
        let request = ProduceRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert!(request.record.value.is_empty());
    }

    #[test]
    fn should_treat_missing_record_as_empty_value() {
        // given
        let json = br#"{}"#;

        // when
        let request = ProduceRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert!(request.record.value.is_empty());
    }

    #[test]
    fn should_treat_null_record_as_empty_value() {
        // given
        let json = br#"{"record": null}"#;

        // when
        let request = ProduceRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert!(request.record.value.is_empty());
    }

    #[test]
    fn should_treat_missing_record_in_protobuf_as_empty_value() {
        // given
        let body = proto::ProduceRequest { record: None }.encode_to_vec();

        // when
        let request = ProduceRequest::from_body(&protobuf_headers(), &body).unwrap();

        // then
        assert!(request.record.value.is_empty());
    }

    #[test]
    fn should_return_error_for_non_base64_value() {
        // given
        let json = br#"{"record": {"value": "not base64!"}}"#;

        // when
        let result = ProduceRequest::from_body(&protojson_headers(), json);

        // then
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn should_return_error_for_invalid_json() {
        // given
        let body = b"not valid json";

        // when
        let result = ProduceRequest::from_body(&protojson_headers(), body);

        // then
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid JSON"));
    }

    #[test]
    fn should_return_error_for_invalid_protobuf() {
        // given
        let body = &[0xFF, 0xFF, 0xFF];

        // when
        let result = ProduceRequest::from_body(&protobuf_headers(), body);

        // then
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid protobuf"));
    }

    #[test]
    fn should_parse_consume_request_from_json() {
        // given
        let json = br#"{"offset": 12}"#;

        // when
        let request = ConsumeRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert_eq!(request.offset, 12);
    }

    #[test]
    fn should_parse_consume_request_from_protobuf() {
        // given
        let body = proto::ConsumeRequest { offset: 5 }.encode_to_vec();

        // when
        let request = ConsumeRequest::from_body(&protobuf_headers(), &body).unwrap();

        // then
        assert_eq!(request.offset, 5);
    }

    #[test]
    fn should_default_missing_offset_to_zero() {
        // given
        let json = br#"{}"#;

        // when
        let request = ConsumeRequest::from_body(&protojson_headers(), json).unwrap();

        // then
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn should_default_missing_offset_to_zero_in_protobuf() {
        // given
        let body: &[u8] = &[];

        // when
        let request = ConsumeRequest::from_body(&protobuf_headers(), body).unwrap();

        // then
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn should_return_error_for_negative_offset() {
        // given
        let json = br#"{"offset": -1}"#;

        // when
        let result = ConsumeRequest::from_body(&protojson_headers(), json);

        // then
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
