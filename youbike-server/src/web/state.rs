//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::stations::{Station, StationClient, StationIndex};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station feed client
    pub client: Arc<StationClient>,

    /// Stations from the most recent fetch
    pub stations: Arc<RwLock<StationIndex>>,
}

impl AppState {
    /// Create a new app state with an initial station list.
    pub fn new(client: StationClient, stations: Vec<Station>) -> Self {
        Self {
            client: Arc::new(client),
            stations: Arc::new(RwLock::new(StationIndex::from(stations))),
        }
    }

    /// Create a new app state by fetching the station list.
    ///
    /// A failed fetch leaves the list empty.
    pub async fn load(client: StationClient) -> Self {
        let stations = client.fetch_stations().await;
        info!(count = stations.len(), "loaded stations");
        Self::new(client, stations)
    }

    /// Refetch the station list and replace the current one.
    ///
    /// The previous list is discarded even when the fetch comes back empty,
    /// so a failed periodic refresh shows no stations until the next
    /// successful one. Returns the number of stations now held.
    pub async fn refresh(&self) -> usize {
        let stations = self.client.fetch_stations().await;
        let count = stations.len();

        let mut guard = self.stations.write().await;
        *guard = StationIndex::from(stations);

        count
    }
}
