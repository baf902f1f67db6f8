//! Server configuration read from the process environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::tfgm::TfgmConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but does not parse
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where feed rows come from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// The live TfGM OData API.
    Live(TfgmConfig),
    /// A JSON fixture file, for offline development, optionally re-read on
    /// an interval.
    Fixture {
        path: PathBuf,
        reload_every: Option<Duration>,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub feed: FeedSource,
}

impl ServerConfig {
    /// Read configuration from environment variables:
    ///
    /// - `TFGM_FIXTURE_PATH`: serve rows from this file instead of the API
    /// - `TFGM_FIXTURE_RELOAD_SECS`: re-read the fixture this often (default never)
    /// - `TFGM_ODATA_ENDPOINT`, `TFGM_ODATA_SUBSCRIPTION_KEY`: live API
    ///   (required unless a fixture is given)
    /// - `TFGM_TIMEOUT_SECS`: upstream timeout (default 30)
    /// - `METROLINK_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind = var("METROLINK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::Invalid {
            name: "METROLINK_BIND_ADDR",
            value: bind.clone(),
        })?;

        let feed = match var("TFGM_FIXTURE_PATH") {
            Some(path) => {
                let reload_every = match var("TFGM_FIXTURE_RELOAD_SECS") {
                    Some(raw) => {
                        let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                            name: "TFGM_FIXTURE_RELOAD_SECS",
                            value: raw.clone(),
                        })?;
                        (secs > 0).then(|| Duration::from_secs(secs))
                    }
                    None => None,
                };

                FeedSource::Fixture {
                    path: PathBuf::from(path),
                    reload_every,
                }
            }
            None => {
                let endpoint =
                    var("TFGM_ODATA_ENDPOINT").ok_or(ConfigError::Missing("TFGM_ODATA_ENDPOINT"))?;
                let key = var("TFGM_ODATA_SUBSCRIPTION_KEY")
                    .ok_or(ConfigError::Missing("TFGM_ODATA_SUBSCRIPTION_KEY"))?;

                let timeout_secs = match var("TFGM_TIMEOUT_SECS") {
                    Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                        name: "TFGM_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?,
                    None => DEFAULT_TIMEOUT_SECS,
                };

                FeedSource::Live(TfgmConfig::new(endpoint, key).with_timeout(timeout_secs))
            }
        };

        Ok(Self { bind_addr, feed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn live_config_with_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TFGM_ODATA_ENDPOINT", "https://api.tfgm.com/odata"),
            ("TFGM_ODATA_SUBSCRIPTION_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        match config.feed {
            FeedSource::Live(tfgm) => {
                assert_eq!(tfgm.endpoint, "https://api.tfgm.com/odata");
                assert_eq!(tfgm.subscription_key, "secret");
                assert_eq!(tfgm.timeout_secs, DEFAULT_TIMEOUT_SECS);
            }
            other => panic!("expected live feed, got {other:?}"),
        }
    }

    #[test]
    fn fixture_path_takes_precedence() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TFGM_FIXTURE_PATH", "data/metrolinks.json"),
            ("METROLINK_BIND_ADDR", "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        match config.feed {
            FeedSource::Fixture { path, reload_every } => {
                assert_eq!(path, PathBuf::from("data/metrolinks.json"));
                assert_eq!(reload_every, None);
            }
            other => panic!("expected fixture feed, got {other:?}"),
        }
    }

    #[test]
    fn fixture_reload_interval() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TFGM_FIXTURE_PATH", "feed.json"),
            ("TFGM_FIXTURE_RELOAD_SECS", "30"),
        ]))
        .unwrap();
        assert!(matches!(
            config.feed,
            FeedSource::Fixture { reload_every: Some(d), .. } if d == Duration::from_secs(30)
        ));

        let config = ServerConfig::from_lookup(lookup(&[
            ("TFGM_FIXTURE_PATH", "feed.json"),
            ("TFGM_FIXTURE_RELOAD_SECS", "0"),
        ]))
        .unwrap();
        assert!(matches!(
            config.feed,
            FeedSource::Fixture { reload_every: None, .. }
        ));

        let err = ServerConfig::from_lookup(lookup(&[
            ("TFGM_FIXTURE_PATH", "feed.json"),
            ("TFGM_FIXTURE_RELOAD_SECS", "often"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { name: "TFGM_FIXTURE_RELOAD_SECS", .. }
        ));
    }

    #[test]
    fn missing_credentials() {
        let err = ServerConfig::from_lookup(lookup(&[(
            "TFGM_ODATA_ENDPOINT",
            "https://api.tfgm.com/odata",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("TFGM_ODATA_SUBSCRIPTION_KEY"));
        assert_eq!(err.to_string(), "TFGM_ODATA_SUBSCRIPTION_KEY must be set");

        let err = ServerConfig::from_lookup(lookup(&[("TFGM_ODATA_ENDPOINT", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TFGM_ODATA_ENDPOINT"));
    }

    #[test]
    fn invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("TFGM_FIXTURE_PATH", "feed.json"),
            ("METROLINK_BIND_ADDR", "localhost"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "METROLINK_BIND_ADDR", .. }));

        let err = ServerConfig::from_lookup(lookup(&[
            ("TFGM_ODATA_ENDPOINT", "https://api.tfgm.com/odata"),
            ("TFGM_ODATA_SUBSCRIPTION_KEY", "secret"),
            ("TFGM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "TFGM_TIMEOUT_SECS",
                value: "soon".into()
            }
        );
    }
}
