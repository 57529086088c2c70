use crate::relay::AlertHandler;
use std::sync::Arc;

/// Shared application state accessible by all route handlers.
///
/// Everything in here is read-only; concurrent requests need no
/// coordination beyond the `Arc`.
pub struct AppState {
    pub handler: Arc<AlertHandler>,
}

impl AppState {
    pub fn new(handler: AlertHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}
