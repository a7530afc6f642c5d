//! Flight tracking server - REST backend over the drone operations database.

use anyhow::Result;
use axum::middleware;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lot_server::api;
use lot_server::config::Config;
use lot_server::persistence;
use lot_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lot_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting flight tracking server...");

    let config = Config::from_env();
    let db =
        persistence::init_database(&config.database_url, config.database_max_connections).await?;
    let state = Arc::new(AppState::new(db));

    // Build the app
    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(middleware::from_fn(api::request_id::ensure_request_id))
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
