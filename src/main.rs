//! EVE Frontier x Sui Fleet Analytics server.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │               FLEET ANALYTICS                     │
//!                      │                                                   │
//!   GET /fleet/{wallet}│  ┌────────┐    ┌───────────────┐   ┌──────────┐  │
//!   ───────────────────┼─▶│  http  │───▶│    assets     │──▶│   rpc    │──┼──▶ Sui fullnode
//!                      │  │handlers│    │   pipeline    │   │ gateway  │  │    (JSON-RPC)
//!                      │  └────────┘    └──────┬────────┘   └──────────┘  │
//!                      │                       │                          │
//!   JSON summary       │                       ▼                          │
//!   ◀──────────────────┼───────────── ┌───────────────┐                   │
//!                      │              │  classifier   │                   │
//!                      │              └───────────────┘                   │
//!                      │                                                   │
//!                      │  config · observability · lifecycle · world       │
//!                      └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use fleet_analytics::config::{self, AppConfig};
use fleet_analytics::http::HttpServer;
use fleet_analytics::lifecycle::{signals, Shutdown};
use fleet_analytics::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "fleet-analytics")]
#[command(about = "Sui fleet analytics API for EVE Frontier", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "FLEET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };
    config::apply_env_overrides(&mut config);
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("fleet-analytics v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        rpc_url = %config.rpc.url,
        rpc_timeout_secs = config.rpc.timeout_secs,
        cors_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
