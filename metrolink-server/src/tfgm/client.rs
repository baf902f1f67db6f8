//! TfGM OData HTTP client.
//!
//! Queries the `Metrolinks` entity set of the TfGM open data API. Each call
//! is a single request; failures are returned as-is without retry.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::error::FeedError;
use super::gateway::FeedGateway;
use super::query::FeedQuery;
use super::types::{ODataResponse, RawFeedRow};

/// Default entity set holding live tram departures.
const DEFAULT_ENTITY_SET: &str = "Metrolinks";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Body characters kept on a decode failure.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Header carrying the API Management subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Configuration for the TfGM client.
#[derive(Debug, Clone)]
pub struct TfgmConfig {
    /// OData service root, e.g. `https://api.tfgm.com/odata`
    pub endpoint: String,
    /// API Management subscription key
    pub subscription_key: String,
    /// Entity set to query
    pub entity_set: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TfgmConfig {
    /// Create a new config for the given endpoint and subscription key.
    pub fn new(endpoint: impl Into<String>, subscription_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            subscription_key: subscription_key.into(),
            entity_set: DEFAULT_ENTITY_SET.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom entity set.
    pub fn with_entity_set(mut self, entity_set: impl Into<String>) -> Self {
        self.entity_set = entity_set.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Full URL of the entity set.
    fn entity_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.entity_set
        )
    }
}

/// TfGM OData API client.
#[derive(Debug, Clone)]
pub struct TfgmClient {
    http: reqwest::Client,
    url: String,
}

impl TfgmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TfgmConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        let key = HeaderValue::from_str(&config.subscription_key).map_err(|_| FeedError::Api {
            status: 0,
            message: "Invalid subscription key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), key);
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.entity_url(),
        })
    }
}

#[async_trait]
impl FeedGateway for TfgmClient {
    async fn query(&self, query: &FeedQuery) -> Result<Vec<RawFeedRow>, FeedError> {
        let pairs = query.to_query_pairs();
        debug!(url = %self.url, options = ?pairs, "Querying TfGM feed");

        let response = self.http.get(&self.url).query(&pairs).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let rows = decode_rows(response.text().await?)?;
        debug!(rows = rows.len(), "TfGM feed responded");

        Ok(rows)
    }
}

/// Map a non-success status to its error.
fn status_error(status: StatusCode, body: String) -> FeedError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return FeedError::Unauthorized;
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return FeedError::RateLimited;
    }

    FeedError::Api {
        status: status.as_u16(),
        message: body,
    }
}

/// Decode an OData envelope into rows.
///
/// On failure the error keeps the first 500 characters of the body.
fn decode_rows(body: String) -> Result<Vec<RawFeedRow>, FeedError> {
    serde_json::from_str::<ODataResponse<RawFeedRow>>(&body)
        .map(|decoded| decoded.value)
        .map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect()),
        })
}
