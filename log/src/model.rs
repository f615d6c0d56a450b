//! Core data types for offsetlog.

use bytes::Bytes;

/// Zero-based position of a record in the log.
///
/// Offsets are assigned at append time and never change afterwards. The
/// record at offset `n` is the `n`th record ever appended.
pub type Offset = u64;

/// A record stored in the log.
///
/// The value is an opaque payload; the log does not interpret or validate it.
/// The offset is owned by the log: whatever the caller puts there is replaced
/// with the assigned offset during [`Log::append`](crate::Log::append).
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use offsetlog::Record;
///
/// let record = Record::new(r#"{"id": "123", "amount": 99.99}"#);
/// assert_eq!(record.offset, 0);
/// assert_eq!(record.value, Bytes::from(r#"{"id": "123", "amount": 99.99}"#));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// The record payload.
    pub value: Bytes,

    /// The offset assigned to this record by the log.
    pub offset: Offset,
}

impl Record {
    /// Creates an unappended record carrying `value`.
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self {
            value: value.into(),
            offset: 0,
        }
    }
}
