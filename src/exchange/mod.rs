//! Exchange integration module
//!
//! Signed request construction and submission for the derivatives API

mod balance;
mod gateway;
mod order;
mod sign;
mod types;

pub use balance::BalanceClient;
pub use gateway::{ExchangeGateway, ORDER_CREATE_PATH, WALLET_BALANCE_PATH};
pub use order::{compose, ORDER_TYPE, TIME_IN_FORCE};
pub use sign::{canonical_string, sign};
pub use types::{BalanceSnapshot, Credentials, ExchangeOutcome, OrderRequest, OrderSide};
