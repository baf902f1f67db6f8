//! Feed gateway error types.

/// Errors from querying the upstream feed.
///
/// Every variant is an upstream failure: the query did not complete, or its
/// response could not be decoded. None are retried.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Subscription key rejected
    #[error("unauthorized: check TFGM_ODATA_SUBSCRIPTION_KEY")]
    Unauthorized,

    /// Rate limited by the API gateway
    #[error("rate limited by TfGM API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not decode into feed rows
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Fixture data could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FeedError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        assert_eq!(FeedError::RateLimited.to_string(), "rate limited by TfGM API");
    }
}
