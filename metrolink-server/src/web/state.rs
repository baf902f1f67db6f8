//! Application state for the web layer.

use std::sync::Arc;

use crate::tfgm::FeedGateway;

/// Shared application state.
///
/// Holds only the feed gateway; every request queries it afresh.
#[derive(Clone)]
pub struct AppState {
    /// Live or fixture-backed feed
    pub gateway: Arc<dyn FeedGateway>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(gateway: impl FeedGateway + 'static) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
