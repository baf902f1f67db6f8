//! OData query construction.
//!
//! The gateway only ever needs a field projection and a single equality test
//! on `StationLocation`, so both are modelled as closed enums rather than a
//! general expression language.

use std::fmt;

use super::types::RawFeedRow;

/// Upstream columns that queries project onto.
///
/// Board queries fetch whole rows, so only the stop index projection's
/// columns are named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedField {
    StationLocation,
    Line,
}

impl FeedField {
    /// The OData property name.
    pub fn odata_name(&self) -> &'static str {
        match self {
            FeedField::StationLocation => "StationLocation",
            FeedField::Line => "Line",
        }
    }
}

impl fmt::Display for FeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.odata_name())
    }
}

/// Row predicate evaluated by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedFilter {
    /// `StationLocation eq '<name>'`, exact and case-sensitive.
    StationLocationEq(String),
}

impl FeedFilter {
    /// Render as an OData `$filter` expression.
    ///
    /// Single quotes in string literals are doubled, as OData requires.
    ///
    /// ```
    /// use metrolink_server::tfgm::FeedFilter;
    ///
    /// let filter = FeedFilter::StationLocationEq("St Peter's Square".into());
    /// assert_eq!(filter.to_odata(), "StationLocation eq 'St Peter''s Square'");
    /// ```
    pub fn to_odata(&self) -> String {
        match self {
            FeedFilter::StationLocationEq(name) => {
                format!("StationLocation eq '{}'", name.replace('\'', "''"))
            }
        }
    }

    /// Evaluate the predicate against an already-fetched row.
    pub fn matches(&self, row: &RawFeedRow) -> bool {
        match self {
            FeedFilter::StationLocationEq(name) => row.station_location == *name,
        }
    }
}

/// A projection plus optional filter over the `Metrolinks` entity set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Fields to return. Empty means all fields.
    pub select: Vec<FeedField>,
    pub filter: Option<FeedFilter>,
}

impl FeedQuery {
    /// Query every row with every field.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict the returned fields.
    pub fn select(mut self, fields: impl IntoIterator<Item = FeedField>) -> Self {
        self.select = fields.into_iter().collect();
        self
    }

    /// Restrict the returned rows.
    pub fn filter(mut self, filter: FeedFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// OData system query options for this query.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if !self.select.is_empty() {
            let fields: Vec<&str> = self.select.iter().map(FeedField::odata_name).collect();
            pairs.push(("$select", fields.join(",")));
        }

        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.to_odata()));
        }

        pairs
    }
}
