//! Command-line and server configuration.

use clap::Parser;

use crate::Config;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "offsetlog")]
#[command(about = "In-memory append-only record log served over HTTP")]
pub struct CliArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "OFFSETLOG_PORT")]
    pub port: u16,

    /// Number of records to reserve space for at startup
    #[arg(long, default_value = "0", env = "OFFSETLOG_CAPACITY_HINT")]
    pub capacity_hint: usize,
}

impl CliArgs {
    /// Build the log configuration from the parsed arguments.
    pub fn to_log_config(&self) -> Config {
        Config {
            capacity_hint: self.capacity_hint,
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct LogServerConfig {
    pub port: u16,
}

impl Default for LogServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl From<&CliArgs> for LogServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { port: args.port }
    }
}
