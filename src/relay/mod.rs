//! Relay pipeline module
//!
//! Orchestrates validate → size → sign → submit for one alert

mod error;
mod handler;

pub use error::RelayError;
pub use handler::{AlertHandler, RelayReceipt};
