//! Read-only log access and the [`LogRead`] trait.
//!
//! This module provides:
//! - [`LogRead`]: The trait defining read operations on the log.
//! - [`LogReader`]: A read-only view of a shared log that implements `LogRead`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::log::Log;
use crate::model::{Offset, Record};

/// Trait for read operations on the log.
///
/// Shared by [`Log`] and [`LogReader`] so that consumers can be written
/// against either.
///
/// # Example
///
/// ```ignore
/// use offsetlog::LogRead;
///
/// async fn last_value(reader: &impl LogRead) -> Option<Bytes> {
///     let len = reader.len().await;
///     if len == 0 {
///         return None;
///     }
///     reader.read(len - 1).await.ok().map(|r| r.value)
/// }
/// ```
#[async_trait]
pub trait LogRead {
    /// Reads the record stored at `offset`.
    ///
    /// # Read Visibility
    ///
    /// A read observes the log as of some moment after the call started. An
    /// offset becomes readable only once its record is fully stored, so a
    /// read never sees a partially appended record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetNotFound`](crate::Error::OffsetNotFound) if
    /// `offset` is not less than the current length of the log.
    async fn read(&self, offset: Offset) -> Result<Record>;

    /// Returns the number of records in the log.
    ///
    /// This is also the offset the next append will be assigned, and the
    /// exclusive upper bound of readable offsets.
    async fn len(&self) -> u64;

    /// Returns `true` if nothing has been appended yet.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// A read-only view of a shared log.
///
/// `LogReader` holds the same [`Log`] as its writer and sees every append as
/// soon as it completes, but exposes no way to append.
#[derive(Clone)]
pub struct LogReader {
    log: Arc<Log>,
}

impl LogReader {
    /// Creates a reader over `log`.
    pub fn new(log: Arc<Log>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl LogRead for LogReader {
    async fn read(&self, offset: Offset) -> Result<Record> {
        self.log.read(offset).await
    }

    async fn len(&self) -> u64 {
        self.log.len().await
    }
}
