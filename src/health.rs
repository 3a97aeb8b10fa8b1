//! Liveness endpoint: one route answering 200 with a fixed plain-text body,
//! for hosting-platform uptime probes. Not part of the relay logic.

use anyhow::Result;
use axum::{routing::get, Router};
use tracing::info;

const ALIVE_BODY: &str = "Bot is running!\n";

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Serves `GET /` on `0.0.0.0:{port}` until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let app = Router::new().route("/", get(alive));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "liveness endpoint listening");
    axum::serve(listener, app).await?;
    Ok(())
}
