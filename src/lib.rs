//! bybit-relay: Webhook relay that turns TradingView alerts into signed
//! Bybit derivatives orders
//!
//! This library provides the core components for:
//! - Alert payload parsing and validation
//! - Canonical-string HMAC-SHA256 request signing
//! - Account equity lookup for percentage-of-equity sizing
//! - Position sizing (fixed quantity or percent of equity)
//! - Order composition and signed submission
//! - Uniform success/failure classification of exchange responses
//! - Webhook HTTP server
//! - Full observability stack

pub mod alert;
pub mod cli;
pub mod config;
pub mod exchange;
pub mod relay;
pub mod risk;
pub mod server;
pub mod telemetry;
