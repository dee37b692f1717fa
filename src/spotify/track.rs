use crate::{
    errors::{Error, Result},
    types::{ApiTrack, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Fetches the full metadata of a single track by its Spotify ID.
    ///
    /// Applies the same artist and ISRC normalization as the playlist
    /// aggregation and shares its token session, so calling this many times
    /// in a row does not repeat the authentication round-trip.
    ///
    /// # Errors
    ///
    /// An unknown id surfaces as an API error; a track payload without an
    /// id (the shape local files have) is reported as an unexpected
    /// response.
    pub async fn track(&mut self, track_id: &str) -> Result<Track> {
        let token = self.session.access_token(&self.http).await?;
        let api_url = format!("{uri}/tracks/{id}", uri = self.api_url, id = track_id);

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let api_track = response.json::<ApiTrack>().await?;
        Track::from_api(api_track)
            .ok_or_else(|| Error::UnexpectedResponse(format!("track {track_id} has no id")))
    }
}
