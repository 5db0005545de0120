//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::stations::{DEFAULT_URL, StationClientConfig};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default interval between background refreshes.
const DEFAULT_REFRESH_SECS: u64 = 60;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`YOUBIKE_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Station feed URL (`YOUBIKE_STATIONS_URL`)
    pub stations_url: String,

    /// Feed request timeout (`YOUBIKE_FETCH_TIMEOUT_SECS`).
    /// Unset keeps the HTTP library default.
    pub fetch_timeout: Option<Duration>,

    /// Interval between background refreshes (`YOUBIKE_REFRESH_SECS`).
    /// `None` disables the refresh task.
    pub refresh_interval: Option<Duration>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("YOUBIKE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "YOUBIKE_BIND_ADDR",
                message: e.to_string(),
            })?;

        let stations_url = lookup("YOUBIKE_STATIONS_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        let fetch_timeout = lookup("YOUBIKE_FETCH_TIMEOUT_SECS")
            .map(|v| parse_secs("YOUBIKE_FETCH_TIMEOUT_SECS", &v))
            .transpose()?;

        let refresh_secs = lookup("YOUBIKE_REFRESH_SECS")
            .map(|v| parse_secs("YOUBIKE_REFRESH_SECS", &v))
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_REFRESH_SECS));
        let refresh_interval = (!refresh_secs.is_zero()).then_some(refresh_secs);

        Ok(Self {
            bind_addr,
            stations_url,
            fetch_timeout,
            refresh_interval,
        })
    }

    /// Client configuration for the station feed.
    pub fn station_client_config(&self) -> StationClientConfig {
        let config = StationClientConfig::default().with_url(&self.stations_url);
        match self.fetch_timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::Invalid {
            var,
            message: format!("{value:?}: {e}"),
        })
}
