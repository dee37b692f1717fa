/// Extracts the playlist identifier from a Spotify playlist URL.
///
/// Strips everything from the first `?` onward (sharing links carry query
/// parameters such as `?si=...`), splits the remainder on `/`, and returns
/// the final segment. Supported formats:
/// - `https://open.spotify.com/playlist/{id}`
/// - `https://open.spotify.com/playlist/{id}?si=xxx`
///
/// A URL ending in `/` yields an empty string, and an input without any `/`
/// is returned unchanged. No validation is performed on the result; a
/// malformed input only surfaces later as an API error.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc");
/// assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn extract_playlist_id(url: &str) -> &str {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query.rsplit('/').next().unwrap_or(without_query)
}
