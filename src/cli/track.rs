use tabled::Table;

use crate::{error, info, spotify::SpotifyClient, types::TrackTableRow};

pub async fn track(track_id: String) {
    let credentials = match super::credentials_from_env() {
        Ok(credentials) => credentials,
        Err(e) => error!("{}", e),
    };

    let mut client = SpotifyClient::new(credentials);
    match client.track(&track_id).await {
        Ok(track) => {
            let table = Table::new(vec![TrackTableRow::from(&track)]);
            println!("{}", table);
            info!("URI: {}", track.uri);
        }
        Err(e) => error!("Failed to fetch track {}: {}", track_id, e),
    }
}
