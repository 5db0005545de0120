//! Shared fixtures for station tests.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use super::types::Station;

/// One record exactly as the live feed serves it.
pub const SAMPLE_RECORD: &str = r#"{"sno":"500101001","sna":"YouBike2.0_捷運科技大樓站","tot":28,"sbi":7,"sarea":"大安區","mday":"2024-05-01 12:00:15","lat":25.02605,"lng":121.5436,"ar":"復興南路二段235號前","sareaen":"Daan Dist.","snaen":"YouBike2.0_MRT Technology Bldg. Sta.","aren":"No.235, Sec. 2, Fuxing S. Rd.","bemp":21,"act":"1","srcUpdateTime":"2024-05-01 12:01:21","updateTime":"2024-05-01 12:01:52","infoTime":"2024-05-01 12:00:15","infoDate":"2024-05-01"}"#;

/// Build a station with the given id, name and district.
pub fn station(id: &str, name: &str, district: &str) -> Station {
    Station {
        id: id.to_string(),
        name: name.to_string(),
        total_slots: 20,
        available_bikes: 5,
        district: district.to_string(),
        station_update_time: "2024-05-01 12:00:00".to_string(),
        latitude: 25.03,
        longitude: 121.56,
        address: "Address".to_string(),
        english_district: "District".to_string(),
        english_name: "Name".to_string(),
        english_address: "Address".to_string(),
        empty_slots: 15,
        active: true,
        source_update_time: "2024-05-01 12:00:30".to_string(),
        update_time: "2024-05-01 12:01:00".to_string(),
        info_time: "2024-05-01 12:00:00".to_string(),
        info_date: "2024-05-01".to_string(),
    }
}

/// Serialize stations to a feed payload.
pub fn payload(stations: &[Station]) -> String {
    serde_json::to_string(stations).unwrap()
}

/// Serve a fixed feed response on an ephemeral local port.
///
/// Returns the URL of the feed.
pub async fn serve_feed(status: StatusCode, body: String) -> String {
    let app = Router::new().route(
        "/youbike_immediate.json",
        get(move || {
            let body = body.clone();
            async move { (status, body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/youbike_immediate.json")
}

/// URL of a local port that nothing is listening on.
pub async fn closed_feed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/youbike_immediate.json")
}
