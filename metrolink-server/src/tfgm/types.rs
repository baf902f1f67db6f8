//! TfGM OData response DTOs.
//!
//! The `Metrolinks` entity set returns one flat row per platform/line
//! report, each carrying up to four departure slots in parallel
//! `DestN`/`CarriagesN`/`StatusN`/`WaitN` columns. Fields absent from a
//! response (for example because of a `$select` projection) decode to
//! their defaults.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Number of departure slots carried by every feed row.
pub const SLOT_COUNT: usize = 4;

/// OData collection envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ODataResponse<T> {
    pub value: Vec<T>,
}

/// One record from the `Metrolinks` entity set.
///
/// The upstream `LastUpdated` column is deliberately not mapped: it carries
/// local time labelled as UTC and is never trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawFeedRow {
    /// Station name; the natural key for a station.
    #[serde(deserialize_with = "string_or_null")]
    pub station_location: String,

    /// The single line recorded against this row.
    #[serde(deserialize_with = "string_or_null")]
    pub line: String,

    /// Physical platform identifier.
    #[serde(deserialize_with = "string_or_null")]
    pub atco_code: String,

    #[serde(deserialize_with = "string_or_null")]
    pub dest0: String,
    #[serde(deserialize_with = "string_or_null")]
    pub carriages0: String,
    #[serde(deserialize_with = "string_or_null")]
    pub status0: String,
    #[serde(deserialize_with = "wait_minutes")]
    pub wait0: u32,

    #[serde(deserialize_with = "string_or_null")]
    pub dest1: String,
    #[serde(deserialize_with = "string_or_null")]
    pub carriages1: String,
    #[serde(deserialize_with = "string_or_null")]
    pub status1: String,
    #[serde(deserialize_with = "wait_minutes")]
    pub wait1: u32,

    #[serde(deserialize_with = "string_or_null")]
    pub dest2: String,
    #[serde(deserialize_with = "string_or_null")]
    pub carriages2: String,
    #[serde(deserialize_with = "string_or_null")]
    pub status2: String,
    #[serde(deserialize_with = "wait_minutes")]
    pub wait2: u32,

    #[serde(deserialize_with = "string_or_null")]
    pub dest3: String,
    #[serde(deserialize_with = "string_or_null")]
    pub carriages3: String,
    #[serde(deserialize_with = "string_or_null")]
    pub status3: String,
    #[serde(deserialize_with = "wait_minutes")]
    pub wait3: u32,

    /// Free-text announcement, frequently repeated across a station's rows.
    #[serde(deserialize_with = "string_or_null")]
    pub message_board: String,
}

/// A borrowed view of one departure slot of a [`RawFeedRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub destination: &'a str,
    pub carriages: &'a str,
    pub status: &'a str,
    pub wait: u32,
}

impl Slot<'_> {
    /// A slot is occupied iff its destination is non-empty.
    pub fn is_occupied(&self) -> bool {
        !self.destination.is_empty()
    }
}

impl RawFeedRow {
    /// The four departure slots, in slot order.
    pub fn slots(&self) -> [Slot<'_>; SLOT_COUNT] {
        [
            Slot {
                destination: &self.dest0,
                carriages: &self.carriages0,
                status: &self.status0,
                wait: self.wait0,
            },
            Slot {
                destination: &self.dest1,
                carriages: &self.carriages1,
                status: &self.status1,
                wait: self.wait1,
            },
            Slot {
                destination: &self.dest2,
                carriages: &self.carriages2,
                status: &self.status2,
                wait: self.wait2,
            },
            Slot {
                destination: &self.dest3,
                carriages: &self.carriages3,
                status: &self.status3,
                wait: self.wait3,
            },
        ]
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wait minutes arrive as strings from the live feed ("4", or "" for an
/// empty slot) but as numbers from some mirrors; accept both.
fn wait_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wait {
        Number(u32),
        Text(String),
    }

    match Option::<Wait>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Wait::Number(n)) => Ok(n),
        Some(Wait::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid wait value: {s:?}")))
        }
    }
}
