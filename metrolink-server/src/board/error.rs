//! Board builder error types.

use crate::tfgm::FeedError;

/// Errors from building a stop board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The feed answered, but no row matched the requested station
    #[error("no Metrolink stop found matching {stop_location:?}")]
    NotFound { stop_location: String },

    /// The feed query itself failed
    #[error(transparent)]
    Upstream(#[from] FeedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BoardError::NotFound {
            stop_location: "Nonexistent Stop".into(),
        };
        assert_eq!(
            err.to_string(),
            "no Metrolink stop found matching \"Nonexistent Stop\""
        );

        let err = BoardError::from(FeedError::RateLimited);
        assert_eq!(err.to_string(), "rate limited by TfGM API");
    }
}
