//! Stop board: merged, sorted departures for one station.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Departure, OverwriteMap, StopBoard};
use crate::tfgm::{FeedFilter, FeedGateway, FeedQuery, RawFeedRow, Slot};

use super::error::BoardError;

/// Assemble a board from the rows matching `stop_location`.
///
/// Rows for the same platform (AtcoCode) are collapsed to the last one
/// reported. Occupied slots of the surviving rows become departures, sorted
/// by wait with ties kept in row/slot order. Messages are taken from every
/// row and deduplicated in order of first occurrence; empty messages are
/// kept like any other.
pub fn stop_board_from_rows(
    stop_location: &str,
    rows: &[RawFeedRow],
    now: DateTime<Utc>,
) -> Result<StopBoard, BoardError> {
    let Some(first) = rows.first() else {
        return Err(BoardError::NotFound {
            stop_location: stop_location.to_string(),
        });
    };

    let by_platform: OverwriteMap<&str, &RawFeedRow> = rows
        .iter()
        .map(|row| (row.atco_code.as_str(), row))
        .collect();

    let mut departures: Vec<Departure> = by_platform
        .into_values()
        .flat_map(|row| {
            row.slots()
                .into_iter()
                .filter(|slot| slot.is_occupied())
                .map(departure_from_slot)
        })
        .collect();

    // Stable: equal waits keep encounter order.
    departures.sort_by_key(|d| d.wait);

    Ok(StopBoard {
        name: first.station_location.clone(),
        departures,
        messages: distinct_messages(rows),
        last_updated: now,
    })
}

fn departure_from_slot(slot: Slot<'_>) -> Departure {
    Departure {
        destination: slot.destination.to_string(),
        carriages: slot.carriages.to_string(),
        status: slot.status.to_string(),
        wait: slot.wait,
    }
}

fn distinct_messages(rows: &[RawFeedRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| row.message_board.as_str())
        .filter(|message| seen.insert(*message))
        .map(str::to_string)
        .collect()
}

/// Query the feed for one station and build its board.
///
/// The station name is matched exactly upstream. Returns
/// [`BoardError::NotFound`] when nothing matches, and
/// [`BoardError::Upstream`] when the query fails. `last_updated` is the
/// current time, not the feed's own timestamp.
pub async fn build_stop_board<G>(gateway: &G, stop_location: &str) -> Result<StopBoard, BoardError>
where
    G: FeedGateway + ?Sized,
{
    let query =
        FeedQuery::all().filter(FeedFilter::StationLocationEq(stop_location.to_string()));
    let rows = gateway.query(&query).await?;

    let board = stop_board_from_rows(stop_location, &rows, Utc::now())?;
    debug!(
        stop = %board.name,
        rows = rows.len(),
        departures = board.departures.len(),
        messages = board.messages.len(),
        "Built stop board"
    );

    Ok(board)
}
