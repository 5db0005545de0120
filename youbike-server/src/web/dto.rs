//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::stations::{COUNTY, Station};

/// Request to search stations.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchRequest {
    /// Substring to look for in district or name. Empty returns everything.
    #[serde(default)]
    pub q: String,
}

/// A station in search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResult {
    pub id: String,

    /// County (always Taipei City for this feed)
    pub county: &'static str,

    pub district: String,

    /// Station name without the vendor prefix
    pub name: String,

    pub english_name: String,

    pub address: String,

    pub available_bikes: u32,

    pub empty_slots: u32,

    pub total_slots: u32,

    /// Whether the station is enabled
    pub active: bool,

    pub latitude: f64,

    pub longitude: f64,

    /// When the city data platform last stored this record
    pub updated_at: String,
}

impl From<&Station> for StationResult {
    fn from(s: &Station) -> Self {
        Self {
            id: s.id.clone(),
            county: COUNTY,
            district: s.district.clone(),
            name: s.display_name().to_string(),
            english_name: s.english_name.clone(),
            address: s.address.clone(),
            available_bikes: s.available_bikes,
            empty_slots: s.empty_slots,
            total_slots: s.total_slots,
            active: s.active,
            latitude: s.latitude,
            longitude: s.longitude,
            updated_at: s.update_time.clone(),
        }
    }
}

/// Response for a station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// The query as received
    pub query: String,

    /// Number of matching stations
    pub count: usize,

    pub stations: Vec<StationResult>,
}

/// Response after refreshing the station list.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Number of stations now held
    pub count: usize,
}
