//! offsetlog - An in-memory, offset-addressed append-only record log.
//!
//! Clients append records and receive the offset each record was stored at.
//! Offsets start at zero and grow by exactly one per append, so the offset of
//! a record is also its position in the log. Records are read back by offset.
//!
//! # Key Concepts
//!
//! - **Log**: The store. Owns every record and serializes appends.
//! - **LogReader**: A read-only handle onto a shared log, for consumers that
//!   should not have write access.
//! - **Offsets**: Assigned by the log at append time. Any offset carried by
//!   the caller's record is overwritten.
//!
//! The log lives in memory only. It starts empty and its contents are dropped
//! with the process.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use offsetlog::{Config, Error, Log, LogRead, Record};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> offsetlog::Result<()> {
//! let log = Log::new(Config::default());
//!
//! let offset = log.append(Record::new("hello")).await?;
//! assert_eq!(offset, 0);
//!
//! let record = log.read(offset).await?;
//! assert_eq!(record.value, Bytes::from("hello"));
//!
//! assert_eq!(log.read(1).await, Err(Error::OffsetNotFound(1)));
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod log;
mod model;
mod reader;
#[cfg(feature = "http-server")]
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use log::Log;
pub use model::{Offset, Record};
pub use reader::{LogRead, LogReader};
