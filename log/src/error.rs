//! Error types for offsetlog.

use crate::model::Offset;

/// Errors returned by log operations and by the HTTP gateway.
///
/// The log itself only ever produces [`Error::OffsetNotFound`]. The other
/// variants are raised at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested offset is at or past the end of the log.
    #[error("offset not found: {0}")]
    OffsetNotFound(Offset),

    /// A request payload could not be decoded.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for offsetlog operations.
pub type Result<T> = std::result::Result<T, Error>;
