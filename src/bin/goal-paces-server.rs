// ABOUTME: Server binary for the Goal Paces marathon pace API
// ABOUTME: Loads configuration, initializes logging, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! # Goal Paces Server Binary
//!
//! Starts the pace API with configuration from the environment, optionally
//! overridden on the command line.

use anyhow::Result;
use clap::Parser;
use goal_paces::{config::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "goal-paces-server")]
#[command(about = "Goal Paces - marathon training and racing pace API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let address = config.bind_address();

    info!("=== Available API Endpoints ===");
    info!("   Pace Report:   GET http://{address}/api/v1/paces?time=HH:MM:SS");
    info!("   Race Pace:     GET http://{address}/api/v1/race?distance=<miles>&time=HH:MM:SS");
    info!("   Health Check:  GET http://{address}/health");
    info!("   Readiness:     GET http://{address}/ready");
    info!("=== End of Endpoint List ===");
}
