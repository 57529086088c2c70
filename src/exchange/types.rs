//! Exchange wire types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-request API credentials
///
/// Supplied inside each alert and dropped when the relay operation ends.
/// The Debug impl masks both fields so key material can never reach a log
/// line through formatting.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("secret_key", &"***")
            .finish()
    }
}

/// Order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Wire representation expected by the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }
}

/// A signed, ready-to-submit order
///
/// Field declaration order matches the canonical signing order; the JSON
/// body serializes in this order with `sign` and `api_key` last.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
    pub order_type: String,
    pub qty: Decimal,
    pub time_in_force: String,
    /// Milliseconds since epoch, generated at build time
    pub timestamp: i64,
    pub sign: String,
    pub api_key: String,
}

/// Account equity for one quote currency, fetched fresh per relay
/// operation and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub currency: String,
    pub equity: Decimal,
}

/// Normalized result of one exchange call
///
/// Success and failure are values; nothing escapes the gateway boundary
/// as an error.
#[derive(Debug, Clone)]
pub enum ExchangeOutcome {
    /// HTTP 200 with a well-formed body carrying a non-null `result`
    Success {
        /// Raw response body
        body: String,
    },
    /// Anything else: bad status, malformed body, missing `result`,
    /// transport error, or timeout
    Failure {
        /// HTTP status, absent when the call never completed
        status: Option<u16>,
        /// Raw response body (empty for transport errors)
        body: String,
        /// Best-effort human-readable reason
        message: String,
    },
}

impl ExchangeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExchangeOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credentials_debug_masks_keys() {
        let creds = Credentials {
            api_key: "live-api-key".to_string(),
            secret_key: "live-secret-key".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("live-api-key"));
        assert!(!debug_str.contains("live-secret-key"));
        assert!(debug_str.contains("***"));
    }

    #[test]
    fn test_order_side_as_str() {
        assert_eq!(OrderSide::Buy.as_str(), "Buy");
        assert_eq!(OrderSide::Sell.as_str(), "Sell");
    }

    #[test]
    fn test_order_request_serialization_order() {
        let order = OrderRequest {
            symbol: "BTCUSDT".to_string(),
            side: OrderSide::Buy,
            leverage: Some(10),
            order_type: "Market".to_string(),
            qty: dec!(1),
            time_in_force: "GoodTillCancel".to_string(),
            timestamp: 1_700_000_000_000,
            sign: "abc".to_string(),
            api_key: "key".to_string(),
        };

        let json = serde_json::to_string(&order).unwrap();
        let symbol_pos = json.find("symbol").unwrap();
        let side_pos = json.find("side").unwrap();
        let leverage_pos = json.find("leverage").unwrap();
        let timestamp_pos = json.find("timestamp").unwrap();
        let sign_pos = json.find("\"sign\"").unwrap();
        assert!(symbol_pos < side_pos);
        assert!(side_pos < leverage_pos);
        assert!(leverage_pos < timestamp_pos);
        assert!(timestamp_pos < sign_pos);
    }

    #[test]
    fn test_order_request_omits_absent_leverage() {
        let order = OrderRequest {
            symbol: "BTCUSDT".to_string(),
            side: OrderSide::Sell,
            leverage: None,
            order_type: "Market".to_string(),
            qty: dec!(0.5),
            time_in_force: "GoodTillCancel".to_string(),
            timestamp: 1_700_000_000_000,
            sign: "abc".to_string(),
            api_key: "key".to_string(),
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("leverage"));
        assert!(json.contains("\"side\":\"Sell\""));
    }

    #[test]
    fn test_outcome_is_success() {
        let ok = ExchangeOutcome::Success {
            body: r#"{"result":{}}"#.to_string(),
        };
        let err = ExchangeOutcome::Failure {
            status: Some(500),
            body: String::new(),
            message: "server error".to_string(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[test]
    fn test_balance_snapshot_equality() {
        let a = BalanceSnapshot {
            currency: "USDT".to_string(),
            equity: dec!(1000),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
