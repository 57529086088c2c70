//! Alert ingestion module
//!
//! Parses and validates inbound webhook payloads

mod types;

pub use types::{Alert, AlertAction, AlertPayload, Sizing, TradeType};
