//! Wallet balance client
//!
//! Signed equity lookup used by percentage-of-equity sizing. Fetched
//! fresh for every relay operation; never cached and never retried.

use super::gateway::ExchangeGateway;
use super::sign;
use super::types::{BalanceSnapshot, Credentials, ExchangeOutcome};
use crate::relay::RelayError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Client for the wallet-balance endpoint
pub struct BalanceClient<'a> {
    gateway: &'a ExchangeGateway,
}

#[derive(Debug, Deserialize)]
struct WalletBalanceResponse {
    result: Option<HashMap<String, CoinBalance>>,
}

#[derive(Debug, Deserialize)]
struct CoinBalance {
    equity: Decimal,
}

impl<'a> BalanceClient<'a> {
    pub fn new(gateway: &'a ExchangeGateway) -> Self {
        Self { gateway }
    }

    /// Fetch account equity for `coin`.
    ///
    /// Signs `{coin, timestamp}` in that order and appends the signature
    /// and API key as query parameters. Fails with `BalanceUnavailable`
    /// on any non-success outcome, a body without a `result` object, or
    /// a `result` that lacks the requested currency.
    pub async fn fetch_equity(
        &self,
        credentials: &Credentials,
        coin: &str,
    ) -> Result<BalanceSnapshot, RelayError> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let params = vec![
            ("coin", coin.to_string()),
            ("timestamp", timestamp.to_string()),
        ];
        let signature = sign::sign(&credentials.secret_key, &params);

        let mut query = params;
        query.push(("sign", signature));
        query.push(("api_key", credentials.api_key.clone()));

        match self.gateway.fetch_balance(&query).await {
            ExchangeOutcome::Success { body } => parse_equity(&body, coin),
            ExchangeOutcome::Failure {
                status, message, ..
            } => Err(RelayError::BalanceUnavailable(format!(
                "balance request failed (status {:?}): {}",
                status, message
            ))),
        }
    }
}

fn parse_equity(body: &str, coin: &str) -> Result<BalanceSnapshot, RelayError> {
    let response: WalletBalanceResponse = serde_json::from_str(body).map_err(|e| {
        RelayError::BalanceUnavailable(format!("unparseable balance body: {}", e))
    })?;

    let balances = response
        .result
        .ok_or_else(|| RelayError::BalanceUnavailable("response has no result object".to_string()))?;

    let coin_balance = balances.get(coin).ok_or_else(|| {
        RelayError::BalanceUnavailable(format!("no balance entry for {}", coin))
    })?;

    Ok(BalanceSnapshot {
        currency: coin.to_string(),
        equity: coin_balance.equity,
    })
}
