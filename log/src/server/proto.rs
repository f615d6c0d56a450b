//! Protobuf message definitions for the log server HTTP API.
//!
//! These types support both binary protobuf encoding (application/protobuf)
//! and ProtoJSON encoding (application/protobuf+json). In ProtoJSON, field
//! names are camelCase and byte fields are standard base64.

use prost::Message;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

/// Record is a single log record as carried on the wire.
///
/// On produce only `value` is meaningful; the server ignores `offset`.
#[serde_as]
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[prost(bytes = "bytes", tag = "1")]
    #[serde_as(as = "Base64")]
    #[serde(default)]
    pub value: bytes::Bytes,
    #[prost(uint64, tag = "2")]
    #[serde(default)]
    pub offset: u64,
}

impl From<crate::Record> for Record {
    fn from(record: crate::Record) -> Self {
        Self {
            value: record.value,
            offset: record.offset,
        }
    }
}

/// ProduceRequest is the request body for POST /.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduceRequest {
    #[prost(message, optional, tag = "1")]
    pub record: Option<Record>,
}

/// ProduceResponse is the response for POST /.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduceResponse {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(uint64, tag = "2")]
    pub offset: u64,
}

impl ProduceResponse {
    /// Create a successful produce response.
    pub fn success(offset: u64) -> Self {
        Self {
            status: "success".to_string(),
            offset,
        }
    }
}

/// ConsumeRequest is the request body for GET /.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeRequest {
    #[prost(uint64, tag = "1")]
    #[serde(default)]
    pub offset: u64,
}

/// ConsumeResponse is the response for GET /.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeResponse {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(message, optional, tag = "2")]
    pub record: Option<Record>,
}

impl ConsumeResponse {
    /// Create a successful consume response.
    pub fn success(record: Record) -> Self {
        Self {
            status: "success".to_string(),
            record: Some(record),
        }
    }
}

/// ErrorResponse is returned for all error cases.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(string, tag = "2")]
    pub error_type: String,
    #[prost(string, tag = "3")]
    pub message: String,
}

impl ErrorResponse {
    /// Create an error response.
    pub fn error(error_type: &str, message: String) -> Self {
        Self {
            status: "error".to_string(),
            error_type: error_type.to_string(),
            message,
        }
    }
}
