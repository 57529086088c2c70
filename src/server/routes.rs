use crate::relay::RelayError;
use crate::server::state::AppState;
use crate::telemetry::{increment_counter, CounterMetric};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health_check))
        // Webhook endpoint the alerting tool posts to
        .route("/", post(relay_alert))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Webhook
// ---------------------------------------------------------------------------

/// Relay one alert and map the outcome to the caller-facing response:
/// 200 `{"message"}` on success, 400 `{"error"}` for input defects, 500
/// with a generic body for everything downstream. Full failure detail
/// only ever reaches the logs.
async fn relay_alert(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    increment_counter(CounterMetric::AlertsReceived);

    // Run the pipeline in its own task so a panic becomes a response,
    // not a dead connection.
    let handler = state.handler.clone();
    let result = match tokio::task::spawn(async move { handler.handle(&body).await }).await {
        Ok(result) => result,
        Err(join_error) => Err(RelayError::UnexpectedFault(join_error.to_string())),
    };

    match result {
        Ok(receipt) => {
            increment_counter(CounterMetric::OrdersSubmitted);
            tracing::info!(
                symbol = %receipt.symbol,
                side = receipt.side.as_str(),
                qty = %receipt.qty,
                "Alert relayed"
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({"message": "order submitted"})),
            )
        }
        Err(error) if error.is_client_error() => {
            increment_counter(CounterMetric::AlertsRejected);
            tracing::warn!(error = %error, "Alert rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": error.to_string()})),
            )
        }
        Err(error) => {
            increment_counter(CounterMetric::OrdersFailed);
            tracing::error!(error = %error, "Alert relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "order relay failed"})),
            )
        }
    }
}
