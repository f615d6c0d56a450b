//! HTTP gateway for offsetlog.
//!
//! Translates HTTP requests into [`Log`](crate::Log) calls. The gateway owns
//! no log state; it decodes payloads, calls the log, and maps the outcome to
//! a response or an error status.

mod config;
mod error;
pub mod handlers;
mod http;
pub mod metrics;
mod middleware;
pub mod proto;
mod request;
mod response;

pub use config::{CliArgs, LogServerConfig};
pub use error::ApiError;
pub use http::{LogServer, build_router};
