//! Caller-side helpers for presenting the stop index.

use crate::domain::{Slug, StopIndexEntry};

/// Sort entries for display: case-insensitively by station, then exactly.
pub fn sorted_alphabetically(mut entries: Vec<StopIndexEntry>) -> Vec<StopIndexEntry> {
    entries.sort_by(|a, b| {
        a.station_location
            .to_lowercase()
            .cmp(&b.station_location.to_lowercase())
            .then_with(|| a.station_location.cmp(&b.station_location))
    });
    entries
}

/// Find the first entry whose station slugifies to `slug`.
///
/// Distinct stations can share a slug; the earliest entry wins, so callers
/// resolve against the display-sorted list.
pub fn resolve_slug<'a>(entries: &'a [StopIndexEntry], slug: &Slug) -> Option<&'a StopIndexEntry> {
    entries
        .iter()
        .find(|entry| slug.matches_station(&entry.station_location))
}
