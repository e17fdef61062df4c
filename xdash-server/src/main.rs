//! xdash-server - serve the ML experiment dashboard.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use xdash_data::Dataset;
use xdash_server::{ServerConfig, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = ServerConfig::parse();

    let dataset = Dataset::from_path(&config.data)
        .with_context(|| format!("failed to load experiment log {}", config.data.display()))?;

    let state = Arc::new(ServerState::new(dataset, config.title.clone()));
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    log::info!("dashboard listening on http://{}", listener.local_addr()?);

    xdash_server::serve(listener, state).await
}
