use axum::{Extension, Json};

use crate::{
    errors::Error,
    spotify::SpotifyClient,
    types::{Credentials, FetchPlaylistRequest, FetchPlaylistResponse, SharedTracks},
    utils,
};

/// Fetches all tracks of the playlist named in the request body.
///
/// The request carries the playlist URL and the caller's API credentials;
/// every call authenticates from scratch with those credentials. The fetched
/// tracks are retained in the shared store so a subsequent transfer request
/// can refer to them by id.
pub async fn fetch_playlist(
    Extension(shared_tracks): Extension<SharedTracks>,
    Json(request): Json<FetchPlaylistRequest>,
) -> Result<Json<FetchPlaylistResponse>, Error> {
    let playlist_id = utils::extract_playlist_id(&request.playlist_url).to_string();

    let credentials = Credentials {
        client_id: request.client_id,
        client_secret: request.client_secret,
    };

    let mut client = SpotifyClient::new(credentials);
    let tracks = client.playlist_tracks(&playlist_id).await?;

    {
        let mut retained = shared_tracks.lock().await;
        *retained = tracks.clone();
    }

    Ok(Json(FetchPlaylistResponse { tracks }))
}
