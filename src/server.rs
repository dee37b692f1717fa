use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, error, info, types::SharedTracks};

/// Starts the HTTP server exposing the fetch and transfer endpoints.
///
/// The shared track store is handed to the handlers as an axum extension;
/// it retains the most recently fetched playlist between the fetch and
/// transfer calls. Binds to the configured `SERVER_ADDRESS`.
pub async fn start_api_server(shared_tracks: SharedTracks) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/api/spotify/playlist", post(api::fetch_playlist))
        .route("/api/spotify/transfer", post(api::transfer))
        .layer(Extension(shared_tracks));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
