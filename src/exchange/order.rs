//! Order composition
//!
//! Builds the signed market-order payload from a validated alert and a
//! computed quantity. Field insertion order is fixed and shared with the
//! signer: it is part of the wire contract, not cosmetic.

use super::sign;
use super::types::OrderRequest;
use crate::alert::{Alert, TradeType};
use crate::relay::RelayError;
use rust_decimal::Decimal;

/// Only market orders are relayed
pub const ORDER_TYPE: &str = "Market";

/// Time-in-force sent with every order
pub const TIME_IN_FORCE: &str = "GoodTillCancel";

/// Compose and sign an order request.
///
/// The quantity is normalized before signing so the canonical string and
/// the serialized body agree on its textual form. The timestamp is
/// generated here, at build time, and is never reused across requests.
///
/// Spot alerts are rejected: the spot order endpoint has a different
/// shape and is out of scope, and downgrading silently would submit a
/// trade the caller did not ask for.
pub fn compose(alert: &Alert, quantity: Decimal) -> Result<OrderRequest, RelayError> {
    if alert.trade_type != TradeType::Derivatives {
        return Err(RelayError::UnsupportedTradeType(
            "only derivatives orders are relayed".to_string(),
        ));
    }

    let qty = quantity.normalize();
    let timestamp = chrono::Utc::now().timestamp_millis();

    let mut params: Vec<(&str, String)> = vec![
        ("symbol", alert.symbol.clone()),
        ("side", alert.side.as_str().to_string()),
    ];
    if let Some(leverage) = alert.leverage {
        params.push(("leverage", leverage.to_string()));
    }
    params.push(("order_type", ORDER_TYPE.to_string()));
    params.push(("qty", qty.to_string()));
    params.push(("time_in_force", TIME_IN_FORCE.to_string()));
    params.push(("timestamp", timestamp.to_string()));

    let signature = sign::sign(&alert.credentials.secret_key, &params);

    Ok(OrderRequest {
        symbol: alert.symbol.clone(),
        side: alert.side,
        leverage: alert.leverage,
        order_type: ORDER_TYPE.to_string(),
        qty,
        time_in_force: TIME_IN_FORCE.to_string(),
        timestamp,
        sign: signature,
        api_key: alert.credentials.api_key.clone(),
    })
}
