//! Heartbeat: a minimal HTTP health and ping service.
//!
//! This is the application entry point. It initializes tracing, loads the
//! optional TOML configuration, builds the Axum router and serves it until
//! the listener fails.

use clap::Parser;
use const_format::formatcp;

use heartbeat::config::{AppConfig, LoggingConfig, DEFAULT_LISTEN_ADDR, DEFAULT_LOG_FILTER};
use heartbeat::create_router;
use heartbeat::http::start_server;
use heartbeat::logging;

const CONFIG_ARG_HELP: &str = formatcp!(
    "Path to an optional TOML configuration file (without one the server listens on {})",
    DEFAULT_LISTEN_ADDR
);

/// Heartbeat: serves /health and /ping as JSON
#[derive(Parser, Debug)]
#[command(name = "heartbeat", version, about)]
struct Args {
    #[arg(short, long, help = CONFIG_ARG_HELP)]
    config: Option<String>,

    /// Log level filter (e.g., "heartbeat=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Configuration decides the log format, so a load failure is reported
    // through a subscriber with the default format
    let config = match AppConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init(&log_filter, &LoggingConfig::default())?;
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    logging::init(&log_filter, &config.logging)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server terminated");
        return Err(e.into());
    }

    Ok(())
}
