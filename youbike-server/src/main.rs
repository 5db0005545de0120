use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use youbike_server::config::ServerConfig;
use youbike_server::stations::StationClient;
use youbike_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });

    let station_client =
        StationClient::new(config.station_client_config()).expect("Failed to create Station client");

    // An unreachable feed leaves the list empty; the refresh loop fills it later
    info!(url = station_client.url(), "fetching stations");
    let state = AppState::load(station_client).await;

    if let Some(period) = config.refresh_interval {
        let state = state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                let count = state.refresh().await;
                if count == 0 {
                    warn!("refresh returned no stations");
                } else {
                    info!(count, "refreshed stations");
                }
            }
        });
    }

    let app = create_router(state);

    let addr = config.bind_addr;
    info!("YouBike station server listening on http://{addr}");
    info!("  GET  /health                - Health check");
    info!("  GET  /api/stations?q=QUERY  - Search stations by district or name");
    info!("  POST /api/stations/refresh  - Refetch the station list");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
