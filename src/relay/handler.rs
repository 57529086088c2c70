//! Alert relay pipeline
//!
//! One alert in, exactly one outcome out. The handler walks the states
//! validate → size → compose/sign → submit → respond; the first failure
//! short-circuits the rest, and nothing past the validation stage runs
//! for input defects.

use crate::alert::{Alert, AlertPayload, Sizing};
use crate::config::Config;
use crate::exchange::{
    compose, BalanceClient, BalanceSnapshot, ExchangeGateway, ExchangeOutcome, OrderSide,
};
use crate::relay::RelayError;
use crate::risk::PositionSizer;
use crate::telemetry::{record_latency, LatencyMetric};
use rust_decimal::Decimal;
use std::time::Instant;
use uuid::Uuid;

/// Success value of one relay operation
#[derive(Debug, Clone)]
pub struct RelayReceipt {
    pub symbol: String,
    pub side: OrderSide,
    pub qty: Decimal,
    /// Raw exchange response body, kept for diagnostics
    pub exchange_body: String,
}

/// Orchestrates the relay pipeline for inbound alerts
///
/// Holds only read-only dependencies; concurrent alerts share one
/// handler without coordination. Credentials arrive inside each alert
/// and are dropped when the operation ends.
pub struct AlertHandler {
    gateway: ExchangeGateway,
    sizer: PositionSizer,
    quote_currency: String,
}

impl AlertHandler {
    pub fn new(gateway: ExchangeGateway, sizer: PositionSizer, quote_currency: String) -> Self {
        Self {
            gateway,
            sizer,
            quote_currency,
        }
    }

    /// Create from Config
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ExchangeGateway::new(config.exchange.clone()),
            PositionSizer::from_config(&config.sizing),
            config.exchange.quote_currency.clone(),
        )
    }

    /// Relay one alert: parse, validate, size, sign, submit, classify.
    ///
    /// Every failure is a typed [`RelayError`]; a single bad alert never
    /// takes the process down.
    pub async fn handle(&self, body: &str) -> Result<RelayReceipt, RelayError> {
        let relay_id = Uuid::new_v4();

        // Received → Validated
        let payload: AlertPayload = serde_json::from_str(body)
            .map_err(|e| RelayError::MalformedAlert(format!("invalid JSON body: {}", e)))?;
        let alert = payload.validate()?;

        tracing::info!(
            %relay_id,
            symbol = %alert.symbol,
            side = alert.side.as_str(),
            leverage = ?alert.leverage,
            "Alert validated"
        );

        // Spot is recognized but never relayed; reject before any
        // network call, including the balance fetch.
        if alert.trade_type != crate::alert::TradeType::Derivatives {
            return Err(RelayError::UnsupportedTradeType(
                "only derivatives orders are relayed".to_string(),
            ));
        }

        // Validated → Sized
        let balance = self.fetch_balance_if_needed(&alert).await?;
        let qty = self.sizer.size(&alert.sizing, balance.as_ref())?;

        tracing::info!(%relay_id, qty = %qty, "Order sized");

        // Sized → Signed&Sent
        let order = compose(&alert, qty)?;

        let started = Instant::now();
        let outcome = self.gateway.submit_order(&order).await;
        record_latency(LatencyMetric::OrderSubmission, started.elapsed());

        // → Responded
        match outcome {
            ExchangeOutcome::Success { body } => {
                tracing::info!(%relay_id, symbol = %order.symbol, "Order accepted");
                Ok(RelayReceipt {
                    symbol: order.symbol,
                    side: order.side,
                    qty: order.qty,
                    exchange_body: body,
                })
            }
            ExchangeOutcome::Failure {
                status,
                body,
                message,
            } => {
                tracing::warn!(
                    %relay_id,
                    status = ?status,
                    body = %body,
                    "Order rejected"
                );
                Err(RelayError::ExchangeFailure(message))
            }
        }
    }

    /// Percentage sizing needs a fresh equity snapshot; fixed sizing
    /// must not touch the balance endpoint at all.
    async fn fetch_balance_if_needed(
        &self,
        alert: &Alert,
    ) -> Result<Option<BalanceSnapshot>, RelayError> {
        match alert.sizing {
            Sizing::FixedQuantity(_) => Ok(None),
            Sizing::PercentOfEquity(_) => {
                let started = Instant::now();
                let snapshot = BalanceClient::new(&self.gateway)
                    .fetch_equity(&alert.credentials, &self.quote_currency)
                    .await?;
                record_latency(LatencyMetric::BalanceFetch, started.elapsed());

                tracing::debug!(
                    currency = %snapshot.currency,
                    equity = %snapshot.equity,
                    "Fetched equity"
                );
                Ok(Some(snapshot))
            }
        }
    }
}
