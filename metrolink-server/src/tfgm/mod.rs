//! TfGM Metrolink feed gateway.
//!
//! The upstream is an OData service whose `Metrolinks` entity set returns
//! one row per platform/line report. Key characteristics:
//! - Rows are redundant: a platform may be reported more than once
//! - Each row records exactly one line, even at multi-line stations
//! - Departures are spread across four fixed `DestN`/`WaitN` column groups
//! - The upstream `LastUpdated` timestamp is unreliable and is ignored

mod client;
mod error;
mod fixture;
mod gateway;
mod query;
mod types;

pub use client::{TfgmClient, TfgmConfig};
pub use error::FeedError;
pub use fixture::FixtureGateway;
pub use gateway::FeedGateway;
pub use query::{FeedField, FeedFilter, FeedQuery};
pub use types::{RawFeedRow, SLOT_COUNT, Slot};
