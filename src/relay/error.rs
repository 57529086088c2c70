//! Relay pipeline errors

use thiserror::Error;

/// Everything that can end a relay operation in failure
#[derive(Debug, Error)]
pub enum RelayError {
    /// Webhook body failed validation; no exchange call was made
    #[error("malformed alert: {0}")]
    MalformedAlert(String),
    /// Equity lookup failed or returned an unusable body
    #[error("balance unavailable: {0}")]
    BalanceUnavailable(String),
    /// Sizing input or computed quantity is unusable
    #[error("invalid sizing: {0}")]
    InvalidSizing(String),
    /// The alert asked for a trade type the relay does not submit
    #[error("unsupported trade type: {0}")]
    UnsupportedTradeType(String),
    /// The exchange rejected the order or could not be reached
    #[error("exchange failure: {0}")]
    ExchangeFailure(String),
    /// Internal fault outside the normal taxonomy
    #[error("unexpected fault: {0}")]
    UnexpectedFault(String),
}

impl RelayError {
    /// True when the failure is a defect in the caller's input (reported
    /// as HTTP 400); everything else is a downstream or internal failure
    /// (reported as HTTP 500 with a generic body).
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::MalformedAlert(_))
    }
}
