//! HTTP transport used by the station client.
//!
//! The client talks to the feed through the [`Transport`] trait so that
//! tests can substitute a fake without a network.

use std::future::Future;
use std::time::Duration;

use super::error::StationError;

/// Status and raw body of a feed response.
#[derive(Debug, Clone)]
pub struct FeedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FeedResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET against the feed URL.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<FeedResponse, StationError>> + Send;
}

/// Transport backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport. Without a timeout the library default applies.
    pub fn new(timeout: Option<Duration>) -> Result<Self, StationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<FeedResponse, StationError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(FeedResponse { status, body })
    }
}
