//! HTTP server implementation for offsetlog.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use tokio::signal;

use super::config::LogServerConfig;
use super::handlers::{
    AppState, handle_consume, handle_healthy, handle_metrics, handle_produce, handle_ready,
};
use super::metrics::Metrics;
use super::middleware::{trace_request, track_metrics};
use crate::Log;

/// Build the router with all routes and middleware.
///
/// `POST /` appends a record, `GET /` reads one back by offset. Request bodies
/// are unbounded; the log accepts values of any size.
pub fn build_router(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .route("/", get(handle_consume).post(handle_produce))
        .route("/metrics", get(handle_metrics))
        .route("/-/healthy", get(handle_healthy))
        .route("/-/ready", get(handle_ready))
        .layer(DefaultBodyLimit::disable())
        .layer(from_fn(trace_request))
        .layer(from_fn_with_state(metrics, track_metrics))
        .with_state(state)
}

/// HTTP server for the log service.
pub struct LogServer {
    log: Arc<Log>,
    config: LogServerConfig,
}

impl LogServer {
    /// Create a new log server.
    pub fn new(log: Arc<Log>, config: LogServerConfig) -> Self {
        Self { log, config }
    }

    /// Run the HTTP server until SIGINT or SIGTERM.
    ///
    /// In-flight requests are allowed to finish. The log is dropped with the
    /// server; nothing is flushed.
    pub async fn run(self) -> std::io::Result<()> {
        let state = AppState {
            log: self.log,
            metrics: Arc::new(Metrics::new()),
        };
        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        tracing::info!("Starting log HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
