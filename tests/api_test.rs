use std::sync::Arc;

use axum::{Extension, Json};
use tokio::sync::Mutex;

use portify::{
    api,
    types::{SharedTracks, Track, TransferRequest},
};

fn sample_track(id: &str, artists: &[&str], isrc: Option<&str>) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {id}"),
        artists: artists.iter().map(|a| a.to_string()).collect(),
        album: format!("Album {id}"),
        isrc: isrc.map(str::to_string),
        uri: format!("spotify:track:{id}"),
    }
}

#[tokio::test]
async fn test_transfer_flattens_selected_tracks_in_playlist_order() {
    let shared: SharedTracks = Arc::new(Mutex::new(vec![
        sample_track("a", &["Artist A", "Artist B"], Some("ISRC-A")),
        sample_track("b", &["Artist B"], None),
        sample_track("c", &["Artist C"], Some("ISRC-C")),
    ]));

    let request = TransferRequest {
        playlist_name: "My Mix".to_string(),
        // Selection order differs from playlist order on purpose
        selected_track_ids: vec!["c".to_string(), "a".to_string()],
    };

    let Json(responses) = api::transfer(Extension(shared), Json(request)).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].title, "Track a");
    assert_eq!(responses[0].artist, "Artist A, Artist B");
    assert_eq!(responses[0].isrc.as_deref(), Some("ISRC-A"));
    assert_eq!(responses[1].title, "Track c");
    assert_eq!(responses[1].artist, "Artist C");
}

#[tokio::test]
async fn test_transfer_preserves_absent_isrc() {
    let shared: SharedTracks = Arc::new(Mutex::new(vec![sample_track("b", &["Artist B"], None)]));

    let request = TransferRequest {
        playlist_name: "My Mix".to_string(),
        selected_track_ids: vec!["b".to_string()],
    };

    let Json(responses) = api::transfer(Extension(shared), Json(request)).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].isrc, None);
}

#[tokio::test]
async fn test_transfer_ignores_unknown_ids() {
    let shared: SharedTracks = Arc::new(Mutex::new(vec![sample_track("a", &["Artist A"], None)]));

    let request = TransferRequest {
        playlist_name: "My Mix".to_string(),
        selected_track_ids: vec!["nope".to_string()],
    };

    let Json(responses) = api::transfer(Extension(shared), Json(request)).await;
    assert!(responses.is_empty());
}

#[tokio::test]
async fn test_health_reports_ok() {
    let Json(body) = api::health().await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
