//! Alert types
//!
//! Raw webhook payload and the validated alert the pipeline runs on.
//! Validation fails closed: anything missing, empty, or unrecognized is
//! rejected before a single network call is made.

use crate::exchange::{Credentials, OrderSide};
use crate::relay::RelayError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Semantic trade action carried by the alerting tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    OpenLong,
    CloseLong,
    OpenShort,
    CloseShort,
}

impl AlertAction {
    /// Fixed action → order side mapping
    pub fn order_side(&self) -> OrderSide {
        match self {
            AlertAction::OpenLong | AlertAction::CloseShort => OrderSide::Buy,
            AlertAction::CloseLong | AlertAction::OpenShort => OrderSide::Sell,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "open_long" => Some(AlertAction::OpenLong),
            "close_long" => Some(AlertAction::CloseLong),
            "open_short" => Some(AlertAction::OpenShort),
            "close_short" => Some(AlertAction::CloseShort),
            _ => None,
        }
    }
}

/// Market segment the alert targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradeType {
    #[default]
    Derivatives,
    /// Recognized but never relayed; the spot endpoint differs and
    /// silently downgrading would submit the wrong trade
    Spot,
}

/// How the order quantity is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Use this quantity verbatim
    FixedQuantity(Decimal),
    /// Quantity = equity × pct / 100, equity fetched fresh per alert
    PercentOfEquity(Decimal),
}

/// Raw webhook body as sent by the alerting tool
///
/// All fields are optional at the serde layer so that validation, not
/// deserialization, decides what is missing and reports it precisely.
#[derive(Clone, Deserialize)]
pub struct AlertPayload {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub leverage: Option<u32>,
    #[serde(default)]
    pub qty: Option<Decimal>,
    #[serde(default)]
    pub percentage: Option<Decimal>,
    #[serde(default)]
    pub trade_type: Option<String>,
}

impl std::fmt::Debug for AlertPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertPayload")
            .field("api_key", &"***")
            .field("secret_key", &"***")
            .field("symbol", &self.symbol)
            .field("action", &self.action)
            .field("side", &self.side)
            .field("leverage", &self.leverage)
            .field("qty", &self.qty)
            .field("percentage", &self.percentage)
            .field("trade_type", &self.trade_type)
            .finish()
    }
}

/// A validated alert, ready for the relay pipeline
#[derive(Debug, Clone)]
pub struct Alert {
    pub credentials: Credentials,
    pub symbol: String,
    pub side: OrderSide,
    pub leverage: Option<u32>,
    pub sizing: Sizing,
    pub trade_type: TradeType,
}

impl AlertPayload {
    /// Validate the payload into an [`Alert`].
    ///
    /// Rules: required strings non-empty; either a recognized `action`
    /// or an explicit `side`; exactly one of `qty` / `percentage`;
    /// leverage, when given, positive; `trade_type` one of
    /// `derivatives` / `spot` (default `derivatives`).
    pub fn validate(self) -> Result<Alert, RelayError> {
        if self.api_key.is_empty() {
            return Err(RelayError::MalformedAlert("missing api_key".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(RelayError::MalformedAlert("missing secret_key".to_string()));
        }
        if self.symbol.is_empty() {
            return Err(RelayError::MalformedAlert("missing symbol".to_string()));
        }

        let side = match (self.action.as_deref(), self.side.as_deref()) {
            (Some(action), _) => AlertAction::parse(action)
                .ok_or_else(|| {
                    RelayError::MalformedAlert(format!("unrecognized action: {}", action))
                })?
                .order_side(),
            (None, Some(side)) => parse_side(side)?,
            (None, None) => {
                return Err(RelayError::MalformedAlert(
                    "either action or side is required".to_string(),
                ))
            }
        };

        let sizing = match (self.qty, self.percentage) {
            (Some(qty), None) => Sizing::FixedQuantity(qty),
            (None, Some(pct)) => Sizing::PercentOfEquity(pct),
            (Some(_), Some(_)) => {
                return Err(RelayError::MalformedAlert(
                    "qty and percentage are mutually exclusive".to_string(),
                ))
            }
            (None, None) => {
                return Err(RelayError::MalformedAlert(
                    "either qty or percentage is required".to_string(),
                ))
            }
        };

        if self.leverage == Some(0) {
            return Err(RelayError::MalformedAlert(
                "leverage must be positive".to_string(),
            ));
        }

        let trade_type = match self.trade_type.as_deref() {
            None => TradeType::Derivatives,
            Some("derivatives") => TradeType::Derivatives,
            Some("spot") => TradeType::Spot,
            Some(other) => {
                return Err(RelayError::MalformedAlert(format!(
                    "unrecognized trade_type: {}",
                    other
                )))
            }
        };

        Ok(Alert {
            credentials: Credentials {
                api_key: self.api_key,
                secret_key: self.secret_key,
            },
            symbol: self.symbol,
            side,
            leverage: self.leverage,
            sizing,
            trade_type,
        })
    }
}

fn parse_side(value: &str) -> Result<OrderSide, RelayError> {
    // The alerting tool is loose about casing here; the action
    // vocabulary above is not.
    match value.to_ascii_lowercase().as_str() {
        "buy" => Ok(OrderSide::Buy),
        "sell" => Ok(OrderSide::Sell),
        _ => Err(RelayError::MalformedAlert(format!(
            "unrecognized side: {}",
            value
        ))),
    }
}
