//! DFLN Monitor
//!
//! Entry point for the monitoring dashboard service. Triggers training
//! rounds against the DFLN backend over one HTTP call and serves the
//! derived views (clients, validators, consensus, topology) over HTTP.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dashboard_server::{DashboardServer, RoundState, ServerContext};
use round_client::{RoundClient, API_URL_ENV, DEFAULT_API_URL};
use round_core::{MapperOptions, ReputationScale};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;

use config::MonitorConfig;

/// Backend reputation scale
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScaleArg {
    /// Backend reports reputation on 0-10
    ZeroToTen,
    /// Backend reports reputation on 0-1
    ZeroToOne,
}

impl From<ScaleArg> for ReputationScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::ZeroToTen => ReputationScale::ZeroToTen,
            ScaleArg::ZeroToOne => ReputationScale::ZeroToOne,
        }
    }
}

/// DFLN monitoring dashboard
#[derive(Parser, Debug)]
#[command(name = "dfln-monitor")]
#[command(about = "Monitoring dashboard for a simulated decentralized FL network", long_about = None)]
struct Args {
    /// Dashboard HTTP bind address
    #[arg(long, default_value = "127.0.0.1:8787")]
    listen_addr: String,

    /// DFLN backend base URL (falls back to DFLN_API_URL, then loopback)
    #[arg(long)]
    api_url: Option<String>,

    /// Scale the backend uses for validator reputation
    #[arg(long, value_enum, default_value = "zero-to-ten")]
    reputation_scale: ScaleArg,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> (MonitorConfig, ReputationScale, String) {
        let api_url = self
            .api_url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config = MonitorConfig {
            listen_addr: self.listen_addr,
            api_url,
        };
        (config, self.reputation_scale.into(), self.log_level)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config, reputation_scale, log_level) = Args::parse().into_config();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DFLN monitor");
    tracing::info!("  Dashboard: {}", config.listen_addr);
    tracing::info!("  Backend: {}", config.api_url);
    tracing::info!("  Reputation scale: {:?}", reputation_scale);

    let context = Arc::new(ServerContext {
        state: Arc::new(RoundState::new()),
        client: RoundClient::new(&config.api_url),
        mapper: MapperOptions { reputation_scale },
    });

    let server = DashboardServer::new(context);
    let listen_addr = config.listen_addr.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run(&listen_addr).await {
            tracing::error!("Dashboard server error: {}", e);
        }
    });

    tracing::info!("Monitor running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down...");
    server_handle.abort();
    tracing::info!("Monitor stopped");

    Ok(())
}
