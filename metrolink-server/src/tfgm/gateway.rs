//! The feed query seam.

use async_trait::async_trait;

use super::error::FeedError;
use super::query::FeedQuery;
use super::types::RawFeedRow;

/// Anything that can answer a [`FeedQuery`] with raw feed rows.
///
/// Implemented by the live [`TfgmClient`](super::TfgmClient) and by
/// [`FixtureGateway`](super::FixtureGateway) for offline use and tests.
#[async_trait]
pub trait FeedGateway: Send + Sync {
    /// Run a query. Rows come back in upstream order.
    async fn query(&self, query: &FeedQuery) -> Result<Vec<RawFeedRow>, FeedError>;
}
