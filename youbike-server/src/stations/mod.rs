//! YouBike station feed client and search.
//!
//! Fetches the live station list from the Taipei City open-data feed and
//! filters it by district or name. A fetch never fails from the caller's
//! point of view: any problem yields an empty list.

mod client;
mod error;
mod search;
mod transport;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{DEFAULT_URL, StationClient, StationClientConfig, decode_stations};
pub use error::StationError;
pub use search::{StationIndex, filter, matches};
pub use transport::{FeedResponse, HttpTransport, Transport};
pub use types::{COUNTY, STATION_NAME_PREFIX, Station};
