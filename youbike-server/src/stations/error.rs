//! Station feed error types.

/// Errors that can occur when fetching the station feed.
///
/// These never cross the [`StationClient::fetch_stations`] boundary; they
/// exist so failures can be logged and inspected through
/// [`StationClient::try_fetch_stations`].
///
/// [`StationClient::fetch_stations`]: super::StationClient::fetch_stations
/// [`StationClient::try_fetch_stations`]: super::StationClient::try_fetch_stations
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status
    #[error("feed returned status {status}")]
    Status { status: u16 },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A non-HTTP transport failed
    #[error("transport error: {message}")]
    Transport { message: String },
}
