//! offsetlog HTTP server binary entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use offsetlog::Log;
use offsetlog::server::{CliArgs, LogServer, LogServerConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    let log_config = args.to_log_config();
    let server_config = LogServerConfig::from(&args);

    tracing::info!("Creating log with config: {:?}", log_config);
    let log = Arc::new(Log::new(log_config));

    let server = LogServer::new(log, server_config);
    server.run().await
}
