//! Benchmark target server binary.
//!
//! Parses the CLI, loads and validates configuration, initializes
//! logging and metrics, binds the listener, and serves until a
//! shutdown signal arrives.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use authbench::config::loader;
use authbench::http::HttpServer;
use authbench::lifecycle::{signals, Shutdown};
use authbench::observability::{logging, metrics};

/// Command-line arguments for the benchmark server.
#[derive(Parser, Debug)]
#[command(name = "authbench")]
#[command(about = "HTTP benchmark target with auth registry and load endpoint", long_about = None)]
#[command(version)]
struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to (e.g., 0.0.0.0:8000)
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let mut config = loader::load_or_default(args.config.as_deref())?;
    if let Some(listen) = args.listen {
        config.listener.bind_address = listen;
    }
    if let Some(level) = args.log_level {
        config.observability.log_level = level;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("authbench v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        seed_users = config.registry.seed_users,
        max_multiplier = config.payload.max_multiplier,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
