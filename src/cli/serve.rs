use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{server, types::SharedTracks};

pub async fn serve() {
    let shared_tracks: SharedTracks = Arc::new(Mutex::new(Vec::new()));
    server::start_api_server(shared_tracks).await;
}
