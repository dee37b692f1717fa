use portify::utils::extract_playlist_id;

#[test]
fn test_extract_id_from_canonical_url() {
    let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M";
    assert_eq!(extract_playlist_id(url), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_id_strips_query_parameters() {
    // Sharing links append a ?si=... token that must not leak into the id
    let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc";
    assert_eq!(extract_playlist_id(url), "37i9dQZF1DXcBWIGoYBM5M");

    // Multiple query parameters
    let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc&utm_source=copy";
    assert_eq!(extract_playlist_id(url), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_trailing_slash_yields_empty_id() {
    // Known edge case: the final segment after a trailing slash is empty.
    // Callers must treat this as a missing id; it is not silently repaired.
    let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M/";
    assert_eq!(extract_playlist_id(url), "");

    let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M/?si=abc";
    assert_eq!(extract_playlist_id(url), "");
}

#[test]
fn test_input_without_slashes_is_returned_unchanged() {
    assert_eq!(extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M"), "37i9dQZF1DXcBWIGoYBM5M");

    // Query parameters are still stripped
    assert_eq!(extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M?si=abc"), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_no_validation_is_performed() {
    // Garbage in, garbage out - malformed input is only detected later when
    // the API call fails
    assert_eq!(extract_playlist_id(""), "");
    assert_eq!(extract_playlist_id("not a url at all"), "not a url at all");
    assert_eq!(extract_playlist_id("https://example.com/album/xyz"), "xyz");
}
