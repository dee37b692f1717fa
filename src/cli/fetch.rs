use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, spotify::SpotifyClient, success, types::TrackTableRow, utils, warning,
};

pub async fn fetch(playlist_url: String) {
    let credentials = match super::credentials_from_env() {
        Ok(credentials) => credentials,
        Err(e) => error!("{}", e),
    };

    let playlist_id = utils::extract_playlist_id(&playlist_url).to_string();
    if playlist_id.is_empty() {
        warning!(
            "Could not derive a playlist id from '{}' (trailing slash?)",
            playlist_url
        );
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist pages...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut client = SpotifyClient::new(credentials);
    let tracks = match client.playlist_tracks(&playlist_id).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlist {}: {}", playlist_id, e);
        }
    };

    success!("Fetched {} tracks from playlist {}", tracks.len(), playlist_id);

    let table_rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
    let table = Table::new(table_rows);
    println!("{}", table);
}
