pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{Result, config::Config, llm::GeminiClient};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router around the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/analyze",
            post(handlers::analyze).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the upstream client from the startup configuration
    let client = GeminiClient::new(config.llm.clone());

    // Create application state
    let app_state = AppState {
        client: Arc::new(client),
    };

    // Create router
    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
