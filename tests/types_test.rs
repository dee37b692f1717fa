use portify::types::{PlaylistItem, PlaylistItemsPage, Track, TransferRequest};
use serde_json::{Value, json};

// Helper to deserialize a single playlist item from a JSON fixture
fn item(value: Value) -> PlaylistItem {
    serde_json::from_value(value).expect("playlist item should deserialize")
}

fn full_track_item() -> Value {
    json!({
        "track": {
            "type": "track",
            "id": "6rqhFgbbKwnb9MLmUQDhG6",
            "name": "Bohemian Rhapsody",
            "uri": "spotify:track:6rqhFgbbKwnb9MLmUQDhG6",
            "is_local": false,
            "artists": [
                {"id": "1dfeR4HaWDbWqFHLkxsg1d", "name": "Queen"}
            ],
            "album": {"name": "A Night At The Opera"},
            "external_ids": {"isrc": "GBUM71029604"}
        }
    })
}

#[test]
fn test_track_item_is_normalized() {
    let track = item(full_track_item()).into_track().expect("should be a track");

    assert_eq!(track.id, "6rqhFgbbKwnb9MLmUQDhG6");
    assert_eq!(track.name, "Bohemian Rhapsody");
    assert_eq!(track.artists, vec!["Queen".to_string()]);
    assert_eq!(track.album, "A Night At The Opera");
    assert_eq!(track.isrc.as_deref(), Some("GBUM71029604"));
    assert_eq!(track.uri, "spotify:track:6rqhFgbbKwnb9MLmUQDhG6");
}

#[test]
fn test_artist_order_matches_api_order() {
    let track = item(json!({
        "track": {
            "type": "track",
            "id": "id1",
            "name": "Collab",
            "uri": "spotify:track:id1",
            "artists": [
                {"name": "Zule"},
                {"name": "Aria"},
                {"name": "Mid"}
            ],
            "album": {"name": "Features"}
        }
    }))
    .into_track()
    .expect("should be a track");

    // Source order, not alphabetical
    assert_eq!(track.artists, vec!["Zule", "Aria", "Mid"]);
}

#[test]
fn test_episode_items_are_skipped() {
    let episode = item(json!({
        "track": {
            "type": "episode",
            "id": "ep1",
            "name": "Some Podcast Episode",
            "uri": "spotify:episode:ep1"
        }
    }));
    assert!(episode.into_track().is_none());
}

#[test]
fn test_local_files_are_skipped() {
    // Local files are tagged "track" but carry is_local and a null id
    let local = item(json!({
        "track": {
            "type": "track",
            "id": null,
            "name": "Home Recording",
            "uri": "spotify:local:::Home+Recording:180",
            "is_local": true,
            "artists": [{"name": "Me"}],
            "album": {"name": ""}
        }
    }));
    assert!(local.into_track().is_none());
}

#[test]
fn test_unknown_entry_kinds_are_skipped() {
    let unknown = item(json!({"track": {"type": "audiobook"}}));
    assert!(unknown.into_track().is_none());
}

#[test]
fn test_removed_entries_are_skipped() {
    // The API yields a null track object for entries it can no longer resolve
    let removed = item(json!({"track": null}));
    assert!(removed.into_track().is_none());

    let missing = item(json!({"added_at": "2024-01-01T00:00:00Z"}));
    assert!(missing.into_track().is_none());
}

#[test]
fn test_missing_external_ids_yield_absent_isrc() {
    let track = item(json!({
        "track": {
            "type": "track",
            "id": "id2",
            "name": "Unreleased",
            "uri": "spotify:track:id2",
            "artists": [{"name": "Someone"}],
            "album": {"name": "Demos"}
        }
    }))
    .into_track()
    .expect("should be a track");

    assert_eq!(track.isrc, None);
}

#[test]
fn test_external_ids_without_isrc_key_yield_absent_isrc() {
    let track = item(json!({
        "track": {
            "type": "track",
            "id": "id3",
            "name": "Catalog Only",
            "uri": "spotify:track:id3",
            "artists": [{"name": "Someone"}],
            "album": {"name": "Catalog"},
            "external_ids": {"upc": "123456789012"}
        }
    }))
    .into_track()
    .expect("should be a track");

    assert_eq!(track.isrc, None);
}

#[test]
fn test_absent_isrc_serializes_as_null_not_empty_string() {
    let track = Track {
        id: "id4".to_string(),
        name: "No Code".to_string(),
        artists: vec!["Someone".to_string()],
        album: "Somewhere".to_string(),
        isrc: None,
        uri: "spotify:track:id4".to_string(),
    };

    let value = serde_json::to_value(&track).unwrap();
    assert!(value["isrc"].is_null());
    assert_ne!(value["isrc"], json!(""));
}

#[test]
fn test_page_deserializes_with_metadata() {
    let page: PlaylistItemsPage = serde_json::from_value(json!({
        "items": [full_track_item()],
        "total": 250,
        "offset": 0,
        "limit": 100,
        "next": "https://api.spotify.com/v1/playlists/x/tracks?offset=100&limit=100"
    }))
    .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, Some(250));
    assert_eq!(page.offset, Some(0));
    assert_eq!(page.limit, Some(100));
    assert!(page.next.is_some());
}

#[test]
fn test_transfer_request_uses_camel_case_fields() {
    let request: TransferRequest = serde_json::from_value(json!({
        "playlistName": "My Mix",
        "selectedTrackIds": ["a", "b"]
    }))
    .unwrap();

    assert_eq!(request.playlist_name, "My Mix");
    assert_eq!(request.selected_track_ids, vec!["a", "b"]);
}
