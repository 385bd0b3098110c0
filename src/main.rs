//! Employee facade server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server ──▶ http::handlers           │
//!                             │   (request id,        │                      │
//!                             │    trace, timeout)    ▼                      │
//!                             │                  employees (search, max,     │
//!                             │                  top-N, verified delete)     │
//!                             │                       │                      │
//!                             │                       ▼                      │
//!     Client Response         │                  upstream::EmployeeApi ──────┼──▶ dummy
//!     ◀───────────────────────┼── JSON ◀───────  (reqwest, envelopes)  ◀─────┼─── employee API
//!                             └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use employee_facade::config::{self, ConfigError, FacadeConfig};
use employee_facade::lifecycle::{self, Shutdown};
use employee_facade::observability::{logging, metrics};
use employee_facade::HttpServer;

#[derive(Parser)]
#[command(name = "employee-facade")]
#[command(about = "REST facade over the dummy employee API", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(long)]
    bind: Option<String>,

    /// Override upstream.base_url.
    #[arg(long)]
    upstream_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => FacadeConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(url) = args.upstream_url {
        config.upstream.base_url = url;
    }
    config::validation::validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("employee-facade v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    match lifecycle::wait_for_signal().await {
        Ok(signal) => tracing::info!(signal, "Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signals"),
    }
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
