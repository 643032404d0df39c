mod logger;
mod routes;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;

/// Main entry point for the position service
///
/// Exposes the single request boundary of the viewer:
/// - `POST /api/position`: account-health lookup for {address, network}
/// - `GET /health`: liveness probe
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::setup_logger().context("Failed to setup logger")?;

    info!("Starting the position service");

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/position", post(routes::position::get_position));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;
    info!("Listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
