//! Data transfer objects for web responses.
//!
//! Field names follow the camelCase shape the stop pages consume.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::{Departure, Slug, StopBoard, StopIndexEntry};

/// A stop in the stop list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResult {
    pub station_location: String,
    pub line: String,
    /// URL token for the stop page
    pub slug: String,
}

impl StopResult {
    pub fn from_entry(entry: &StopIndexEntry) -> Self {
        Self {
            station_location: entry.station_location.clone(),
            line: entry.line.clone(),
            slug: Slug::from_station(&entry.station_location).to_string(),
        }
    }
}

/// Response listing all stops.
#[derive(Debug, Serialize)]
pub struct StopListResponse {
    pub stops: Vec<StopResult>,
}

/// A departure on a stop board.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    pub destination: String,

    /// Carriage formation ("Single" or "Double")
    #[serde(rename = "type")]
    pub kind: String,

    pub status: String,

    /// Minutes until departure
    pub wait: u32,
}

impl DepartureResult {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            destination: departure.destination.clone(),
            kind: departure.carriages.clone(),
            status: departure.status.clone(),
            wait: departure.wait,
        }
    }
}

/// Response for a single stop board.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopBoardResponse {
    pub name: String,
    pub departures: Vec<DepartureResult>,
    pub messages: Vec<String>,
    /// RFC 3339 UTC with milliseconds, e.g. `2021-06-01T12:30:00.000Z`
    pub last_updated: String,
}

impl StopBoardResponse {
    pub fn from_board(board: &StopBoard) -> Self {
        Self {
            name: board.name.clone(),
            departures: board
                .departures
                .iter()
                .map(DepartureResult::from_departure)
                .collect(),
            messages: board.messages.clone(),
            last_updated: board
                .last_updated
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
