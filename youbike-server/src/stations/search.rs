//! Substring search over stations by district or name.

use std::borrow::Cow;

use super::types::Station;

/// Whether `station`'s district or name contains `query`.
///
/// Matching is exact substring containment against the raw fields: no case
/// folding, no trimming, and the name keeps its vendor prefix.
pub fn matches(station: &Station, query: &str) -> bool {
    station.district.contains(query) || station.name.contains(query)
}

/// Filter `stations` down to those matching `query`.
///
/// An empty query returns the input untouched. Otherwise the result keeps
/// the original relative order.
///
/// # Examples
///
/// ```
/// # use youbike_server::stations::{filter, Station};
/// let stations: Vec<Station> = Vec::new();
/// assert!(filter(&stations, "大安").is_empty());
/// ```
pub fn filter<'a>(stations: &'a [Station], query: &str) -> Cow<'a, [Station]> {
    if query.is_empty() {
        return Cow::Borrowed(stations);
    }

    Cow::Owned(
        stations
            .iter()
            .filter(|s| matches(s, query))
            .cloned()
            .collect(),
    )
}

/// A full station list that can be searched.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    stations: Vec<Station>,
}

impl StationIndex {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// All stations, in feed order.
    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations whose district or name contains `query`.
    pub fn search(&self, query: &str) -> Cow<'_, [Station]> {
        filter(&self.stations, query)
    }
}

impl From<Vec<Station>> for StationIndex {
    fn from(stations: Vec<Station>) -> Self {
        Self::new(stations)
    }
}
