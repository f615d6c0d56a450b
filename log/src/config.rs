//! Configuration options for offsetlog.

/// Configuration for creating a [`Log`](crate::Log).
///
/// # Example
///
/// ```
/// use offsetlog::{Config, Log};
///
/// let log = Log::new(Config { capacity_hint: 1024 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of records to reserve space for up front.
    ///
    /// This only affects allocation. The log grows past it as needed, and
    /// `0` (the default) reserves nothing.
    pub capacity_hint: usize,
}
