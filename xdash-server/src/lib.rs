//! HTTP front for the experiment dashboard.
//!
//! Serves the dashboard page and a JSON API over a dataset loaded once at
//! startup. The chart figures come from `xdash-chart`; this crate only wires
//! them to routes.

pub mod config;
pub mod error;
pub mod page;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{create_router, ServerState};

use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve the dashboard on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: Arc<ServerState>) -> anyhow::Result<()> {
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
