//! Webhook server module
//!
//! HTTP shell around the relay pipeline

pub mod routes;
pub mod state;

use crate::relay::AlertHandler;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the Axum application router.
pub fn build_router(handler: AlertHandler) -> Router {
    let app_state = Arc::new(state::AppState::new(handler));

    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the webhook server.
pub async fn start_server(handler: AlertHandler, bind_addr: &str) -> anyhow::Result<()> {
    let app = build_router(handler);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Webhook server listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
