//! Stop index: the distinct stations in the feed.

use tracing::debug;

use crate::domain::{OverwriteMap, StopIndexEntry};
use crate::tfgm::{FeedError, FeedField, FeedGateway, FeedQuery, RawFeedRow};

/// Derive the stop index from raw rows.
///
/// Rows are keyed by station; a later row for a station overwrites the
/// earlier line but keeps the station's first-seen position. The feed only
/// carries one line per row, so multi-line stations surface with whichever
/// line was reported last.
pub fn stop_index_from_rows(rows: impl IntoIterator<Item = RawFeedRow>) -> Vec<StopIndexEntry> {
    let lines_by_station: OverwriteMap<String, String> = rows
        .into_iter()
        .map(|row| (row.station_location, row.line))
        .collect();

    lines_by_station
        .into_iter()
        .map(|(station_location, line)| StopIndexEntry {
            station_location,
            line,
        })
        .collect()
}

/// Query the feed for every station/line pair and build the stop index.
///
/// An empty feed yields an empty index. Gateway failures are returned
/// unchanged.
pub async fn build_stop_index<G>(gateway: &G) -> Result<Vec<StopIndexEntry>, FeedError>
where
    G: FeedGateway + ?Sized,
{
    let query = FeedQuery::all().select([FeedField::StationLocation, FeedField::Line]);
    let rows = gateway.query(&query).await?;
    let row_count = rows.len();

    let index = stop_index_from_rows(rows);
    debug!(rows = row_count, stops = index.len(), "Built stop index");

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfgm::FixtureGateway;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn row(station: &str, line: &str) -> RawFeedRow {
        RawFeedRow {
            station_location: station.into(),
            line: line.into(),
            ..Default::default()
        }
    }

    fn entry(station: &str, line: &str) -> StopIndexEntry {
        StopIndexEntry {
            station_location: station.into(),
            line: line.into(),
        }
    }

    /// Gateway that records the queries it receives.
    struct RecordingGateway {
        rows: Vec<RawFeedRow>,
        queries: Mutex<Vec<FeedQuery>>,
    }

    #[async_trait]
    impl FeedGateway for RecordingGateway {
        async fn query(&self, query: &FeedQuery) -> Result<Vec<RawFeedRow>, FeedError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(self.rows.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl FeedGateway for FailingGateway {
        async fn query(&self, _query: &FeedQuery) -> Result<Vec<RawFeedRow>, FeedError> {
            Err(FeedError::Api {
                status: 503,
                message: "down".into(),
            })
        }
    }

    #[test]
    fn later_line_overwrites_but_position_is_kept() {
        let index = stop_index_from_rows(vec![row("A", "1"), row("B", "2"), row("A", "3")]);
        assert_eq!(index, vec![entry("A", "3"), entry("B", "2")]);
    }

    #[test]
    fn empty_feed_gives_empty_index() {
        assert!(stop_index_from_rows(Vec::new()).is_empty());
    }

    #[test]
    fn station_names_are_not_normalized() {
        let index = stop_index_from_rows(vec![
            row("Market Street", "Bury"),
            row("market street", "Bury"),
            row("Market Street", "Altrincham"),
        ]);
        assert_eq!(
            index,
            vec![
                entry("Market Street", "Altrincham"),
                entry("market street", "Bury"),
            ]
        );
    }

    #[tokio::test]
    async fn build_requests_narrow_projection() {
        let gateway = RecordingGateway {
            rows: vec![row("Bury", "Bury"), row("Radcliffe", "Bury")],
            queries: Mutex::new(Vec::new()),
        };

        let index = build_stop_index(&gateway).await.unwrap();
        assert_eq!(index.len(), 2);

        let queries = gateway.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].select,
            vec![FeedField::StationLocation, FeedField::Line]
        );
        assert!(queries[0].filter.is_none());
    }

    #[tokio::test]
    async fn build_from_fixture() {
        let gateway = FixtureGateway::from_rows(vec![row("A", "1"), row("B", "2"), row("A", "3")]);
        let index = build_stop_index(&gateway).await.unwrap();
        assert_eq!(index, vec![entry("A", "3"), entry("B", "2")]);
    }

    #[tokio::test]
    async fn gateway_failure_propagates() {
        let result = build_stop_index(&FailingGateway).await;
        assert!(matches!(result, Err(FeedError::Api { status: 503, .. })));
    }
}
