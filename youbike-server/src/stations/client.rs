//! YouBike immediate-availability feed client.

use std::time::Duration;

use tracing::{debug, warn};

use super::error::StationError;
use super::transport::{HttpTransport, Transport};
use super::types::Station;

/// Taipei City open-data feed of live YouBike 2.0 station availability.
pub const DEFAULT_URL: &str =
    "https://tcgbusfs.blob.core.windows.net/dotapp/youbike/v2/youbike_immediate.json";

/// Configuration for the station client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Feed URL
    pub url: String,
    /// Request timeout. `None` keeps the HTTP library default.
    pub timeout: Option<Duration>,
}

impl StationClientConfig {
    /// Set a custom feed URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: None,
        }
    }
}

/// Client for the station feed.
///
/// Each fetch is a single GET with no retry and no caching. Concurrent
/// fetches are independent of one another.
#[derive(Debug, Clone)]
pub struct StationClient<T = HttpTransport> {
    transport: T,
    url: String,
}

impl StationClient {
    /// Create a client backed by a real HTTP transport.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config.url, transport))
    }
}

impl<T: Transport> StationClient<T> {
    /// Create a client that fetches `url` through the given transport.
    pub fn with_transport(url: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// The feed URL this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch all stations.
    ///
    /// Never fails: a transport error, a non-success status, or any decode
    /// error yields an empty list. The cause is logged.
    pub async fn fetch_stations(&self) -> Vec<Station> {
        match self.try_fetch_stations().await {
            Ok(stations) => {
                debug!(count = stations.len(), "fetched stations");
                stations
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "station fetch failed");
                Vec::new()
            }
        }
    }

    /// Fetch all stations, keeping the reason for a failure.
    ///
    /// An empty JSON array is `Ok` with no stations.
    pub async fn try_fetch_stations(&self) -> Result<Vec<Station>, StationError> {
        let response = self.transport.get(&self.url).await?;

        if !response.is_success() {
            return Err(StationError::Status {
                status: response.status,
            });
        }

        decode_stations(&response.body)
    }
}

/// Decode a feed payload.
///
/// The payload must be a JSON array in which every element is a complete
/// station record. One bad record fails the whole batch.
pub fn decode_stations(body: &[u8]) -> Result<Vec<Station>, StationError> {
    serde_json::from_slice(body).map_err(|e| StationError::Json {
        message: e.to_string(),
    })
}
