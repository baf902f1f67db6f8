//! Fixture-backed gateway for running without API access.
//!
//! Loads feed rows from a JSON file and answers queries against them as if
//! they were live responses. Filters are evaluated locally; projections are
//! ignored because callers never rely on fields being absent.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::error::FeedError;
use super::gateway::FeedGateway;
use super::query::FeedQuery;
use super::types::RawFeedRow;

/// Accepted fixture file shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Envelope { value: Vec<RawFeedRow> },
    Rows(Vec<RawFeedRow>),
}

/// Gateway serving a fixed set of rows.
#[derive(Debug, Clone, Default)]
pub struct FixtureGateway {
    rows: Arc<RwLock<Vec<RawFeedRow>>>,
}

impl FixtureGateway {
    /// Serve the given rows in the given order.
    pub fn from_rows(rows: Vec<RawFeedRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Load rows from a JSON file holding either an OData envelope
    /// (`{"value": [...]}`) or a bare array of rows.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        Ok(Self::from_rows(read_rows(path.as_ref())?))
    }

    /// Number of rows currently served.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Replace the served rows with the contents of a file.
    ///
    /// On failure the existing rows are kept.
    pub async fn reload(&self, path: impl AsRef<Path>) -> Result<usize, FeedError> {
        let rows = read_rows(path.as_ref())?;
        let count = rows.len();
        *self.rows.write().await = rows;
        Ok(count)
    }
}

#[async_trait]
impl FeedGateway for FixtureGateway {
    async fn query(&self, query: &FeedQuery) -> Result<Vec<RawFeedRow>, FeedError> {
        let rows = self.rows.read().await;

        let matching = rows
            .iter()
            .filter(|row| query.filter.as_ref().is_none_or(|f| f.matches(row)))
            .cloned()
            .collect();

        Ok(matching)
    }
}

fn read_rows(path: &Path) -> Result<Vec<RawFeedRow>, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|e| FeedError::Fixture {
        message: format!("failed to read {}: {e}", path.display()),
    })?;

    let file: FixtureFile = serde_json::from_str(&json).map_err(|e| FeedError::Fixture {
        message: format!("failed to parse {}: {e}", path.display()),
    })?;

    Ok(match file {
        FixtureFile::Envelope { value } => value,
        FixtureFile::Rows(rows) => rows,
    })
}
