//! Station record as published by the YouBike 2.0 immediate feed.

use serde::{Deserialize, Serialize};

/// Vendor prefix carried by every station name in the feed.
pub const STATION_NAME_PREFIX: &str = "YouBike2.0_";

/// County every station in this feed belongs to.
pub const COUNTY: &str = "台北市";

/// A single bike-share docking station with capacity and live occupancy.
///
/// Field names follow Rust conventions; the serde renames map them to the
/// abbreviated keys used on the wire (`sno`, `sna`, `sbi`, ...). Every field
/// is required, so a record missing any key fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier
    #[serde(rename = "sno")]
    pub id: String,

    /// Station name, including the `YouBike2.0_` prefix
    #[serde(rename = "sna")]
    pub name: String,

    /// Total number of parking slots
    #[serde(rename = "tot")]
    pub total_slots: u32,

    /// Bikes currently available
    #[serde(rename = "sbi")]
    pub available_bikes: u32,

    /// Administrative district (e.g. "大安區")
    #[serde(rename = "sarea")]
    pub district: String,

    /// Per-station source update time
    #[serde(rename = "mday")]
    pub station_update_time: String,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lng")]
    pub longitude: f64,

    /// Street address
    #[serde(rename = "ar")]
    pub address: String,

    /// Administrative district in English (e.g. "Daan Dist.")
    #[serde(rename = "sareaen")]
    pub english_district: String,

    /// Station name in English
    #[serde(rename = "snaen")]
    pub english_name: String,

    /// Street address in English
    #[serde(rename = "aren")]
    pub english_address: String,

    /// Empty slots currently available
    #[serde(rename = "bemp")]
    pub empty_slots: u32,

    /// Whether the station is enabled. Sent as `"0"` or `"1"`.
    #[serde(rename = "act", with = "active_flag")]
    pub active: bool,

    /// Time the vendor system published the data
    #[serde(rename = "srcUpdateTime")]
    pub source_update_time: String,

    /// Time the city data platform stored the data
    #[serde(rename = "updateTime")]
    pub update_time: String,

    #[serde(rename = "infoTime")]
    pub info_time: String,

    #[serde(rename = "infoDate")]
    pub info_date: String,
}

impl Station {
    /// Station name with the vendor prefix removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use youbike_server::stations::Station;
    /// # let json = r#"{"sno":"1","sna":"YouBike2.0_捷運公館站","tot":1,"sbi":0,"sarea":"中正區",
    /// #   "mday":"","lat":0.0,"lng":0.0,"ar":"","sareaen":"","snaen":"","aren":"","bemp":1,
    /// #   "act":"1","srcUpdateTime":"","updateTime":"","infoTime":"","infoDate":""}"#;
    /// let station: Station = serde_json::from_str(json).unwrap();
    /// assert_eq!(station.display_name(), "捷運公館站");
    /// ```
    pub fn display_name(&self) -> &str {
        self.name
            .strip_prefix(STATION_NAME_PREFIX)
            .unwrap_or(&self.name)
    }
}

/// `"0"` / `"1"` string encoding of the `act` flag.
mod active_flag {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::Serializer;

    pub fn serialize<S: Serializer>(active: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *active { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &r#""0" or "1""#,
            )),
        }
    }
}
