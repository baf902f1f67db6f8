//! Stop index and departure board entities.
//!
//! All of these are built fresh from each feed response and never persisted.

use chrono::{DateTime, Utc};

/// One distinct station and the (single) line the feed records for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopIndexEntry {
    pub station_location: String,
    pub line: String,
}

/// One occupied departure slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub destination: String,
    /// Tram formation, e.g. "Single" or "Double".
    pub carriages: String,
    pub status: String,
    /// Minutes until departure.
    pub wait: u32,
}

/// The merged departure board for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopBoard {
    /// Station display name.
    pub name: String,
    /// Departures across all platforms, soonest first.
    pub departures: Vec<Departure>,
    /// Distinct message board texts, in order of first occurrence.
    pub messages: Vec<String>,
    /// When this board was assembled (not taken from the feed).
    pub last_updated: DateTime<Utc>,
}
