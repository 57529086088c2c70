//! Exchange gateway
//!
//! Owns the HTTP client and base URL, performs one signed call per
//! invocation, and collapses every HTTP/JSON shape into a binary
//! [`ExchangeOutcome`]. Timeouts and transport errors are failures, not
//! panics or escaping errors.

use super::types::{ExchangeOutcome, OrderRequest};
use crate::config::ExchangeConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Path for market order creation, relative to the configured base URL
pub const ORDER_CREATE_PATH: &str = "/order/create";

/// Path for the equity lookup, relative to the configured base URL
pub const WALLET_BALANCE_PATH: &str = "/wallet-balance";

/// Gateway to the exchange's private REST API
pub struct ExchangeGateway {
    client: Client,
    config: ExchangeConfig,
}

impl ExchangeGateway {
    /// Create a gateway with a bounded per-call timeout
    pub fn new(config: ExchangeConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Base URL this gateway submits against
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submit a signed order. Exactly one POST, classified into an outcome.
    pub async fn submit_order(&self, order: &OrderRequest) -> ExchangeOutcome {
        let url = format!("{}{}", self.config.base_url, ORDER_CREATE_PATH);

        tracing::debug!(url = %url, symbol = %order.symbol, "Submitting order");

        let result = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(order)
            .send()
            .await;

        match result {
            Ok(response) => classify(response).await,
            Err(e) => transport_failure(e),
        }
    }

    /// Fetch the wallet balance. Exactly one GET with the signed query,
    /// classified into an outcome.
    pub async fn fetch_balance(&self, query: &[(&str, String)]) -> ExchangeOutcome {
        let url = format!("{}{}", self.config.base_url, WALLET_BALANCE_PATH);

        tracing::debug!(url = %url, "Fetching wallet balance");

        let result = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await;

        match result {
            Ok(response) => classify(response).await,
            Err(e) => transport_failure(e),
        }
    }
}

/// Classify a completed HTTP exchange response.
///
/// Success requires all three: HTTP 200, a well-formed JSON body, and a
/// present, non-null `result` field. An empty `result` object still
/// counts as success; everything else is a failure carrying the raw
/// status and body for diagnostics.
async fn classify(response: reqwest::Response) -> ExchangeOutcome {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    classify_parts(status, body)
}

fn classify_parts(status: u16, body: String) -> ExchangeOutcome {
    if status == 200 {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if json.get("result").map(|r| !r.is_null()).unwrap_or(false) {
                return ExchangeOutcome::Success { body };
            }
        }
    }

    let message = parse_error_message(&body);
    ExchangeOutcome::Failure {
        status: Some(status),
        body,
        message,
    }
}

fn transport_failure(error: reqwest::Error) -> ExchangeOutcome {
    // The URL may carry signed query parameters; strip it from the
    // reported error.
    let message = error.without_url().to_string();
    ExchangeOutcome::Failure {
        status: None,
        body: String::new(),
        message,
    }
}

/// Pull a human-readable reason out of an error body when one exists
fn parse_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["ret_msg", "message", "error"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    "exchange request failed".to_string()
}
