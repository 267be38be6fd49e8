//! ERP API Gateway
//!
//! Single-hop gateway between the garment-ERP dashboard and its REST
//! backend. Every request under /api is forwarded verbatim (minus hop
//! headers) to the configured upstream; department-scoped paths can
//! optionally be gated server-side.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use erp_gateway::config::loader::load_config;
use erp_gateway::config::watcher::ConfigWatcher;
use erp_gateway::observability::{logging, metrics};
use erp_gateway::{GatewayConfig, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "erp-gateway")]
#[command(about = "API gateway for the garment ERP backend", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_exists = args.config.exists();
    let config = if config_exists {
        load_config(&args.config)?
    } else {
        GatewayConfig::default()
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("erp-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    if !config_exists {
        tracing::warn!(path = ?args.config, "Config file not found, using defaults");
    }
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        enforce_access = config.access.enforce,
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

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Hot reload only makes sense when a config file is present.
    let (_watcher, config_updates) = if config_exists {
        let (watcher, updates) = ConfigWatcher::new(&args.config);
        (Some(watcher.run()?), updates)
    } else {
        let (_tx, updates) = mpsc::unbounded_channel();
        (None, updates)
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        erp_gateway::lifecycle::shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
