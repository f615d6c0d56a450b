//! Core Log implementation with read and write APIs.
//!
//! This module provides the [`Log`] struct, the primary entry point for
//! interacting with offsetlog. It exposes the write operation ([`append`])
//! directly and the read operations via the [`LogRead`] trait.
//!
//! [`append`]: Log::append

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Offset, Record};
use crate::reader::LogRead;

/// State guarded by the log's lock.
///
/// `records[i].offset == i` for every stored record.
struct LogInner {
    records: Vec<Record>,
}

/// The main log interface providing read and write operations.
///
/// # Thread Safety
///
/// `Log` is designed to be shared across threads, typically as an
/// `Arc<Log>`. All methods take `&self`. A single reader-writer lock guards
/// the records: appends hold it exclusively, reads share it. The length
/// check and the element access of every operation happen under one guard,
/// so appends and reads are linearizable.
///
/// # Example
///
/// ```ignore
/// use offsetlog::{Config, Log, LogRead, Record};
///
/// let log = Log::new(Config::default());
///
/// let first = log.append(Record::new("hello")).await?;
/// let second = log.append(Record::new("world")).await?;
/// assert_eq!((first, second), (0, 1));
///
/// let record = log.read(second).await?;
/// assert_eq!(record.value, Bytes::from("world"));
/// ```
pub struct Log {
    inner: RwLock<LogInner>,
}

impl Log {
    /// Creates an empty log.
    pub fn new(config: Config) -> Self {
        let inner = LogInner {
            records: Vec::with_capacity(config.capacity_hint),
        };

        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Appends a record to the log and returns the offset it was stored at.
    ///
    /// The record's `offset` field is overwritten with the current length of
    /// the log. Concurrent appends are serialized; they are assigned offsets
    /// in the order they acquire the lock, which need not be the order they
    /// were called in.
    ///
    /// # Errors
    ///
    /// None under normal operation: there is no capacity bound and values
    /// are not validated.
    pub async fn append(&self, mut record: Record) -> Result<Offset> {
        let mut inner = self.inner.write().await;

        let offset = inner.records.len() as Offset;
        record.offset = offset;
        inner.records.push(record);

        tracing::trace!(offset, "appended record");
        Ok(offset)
    }

    /// Appends `value` as a new record.
    ///
    /// Shorthand for `append(Record::new(value))`.
    pub async fn append_value(&self, value: impl Into<Bytes>) -> Result<Offset> {
        self.append(Record::new(value)).await
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[async_trait]
impl LogRead for Log {
    async fn read(&self, offset: Offset) -> Result<Record> {
        let inner = self.inner.read().await;

        // usize::try_from only fails for offsets no Vec could reach.
        match usize::try_from(offset)
            .ok()
            .and_then(|idx| inner.records.get(idx))
        {
            Some(record) => Ok(record.clone()),
            None => {
                tracing::debug!(offset, len = inner.records.len(), "offset not found");
                Err(Error::OffsetNotFound(offset))
            }
        }
    }

    async fn len(&self) -> u64 {
        self.inner.read().await.records.len() as u64
    }
}
