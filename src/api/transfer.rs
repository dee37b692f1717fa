use std::collections::HashSet;

use axum::{Extension, Json};

use crate::{
    info,
    types::{SharedTracks, TransferRequest, TransferResponse},
};

/// Flattens the selected tracks of the last fetch for the transfer phase.
///
/// Filters the retained tracks by the submitted ids and returns one
/// `(isrc, title, artist)` triple per track, in playlist order. Ids that do
/// not match a retained track are ignored. The named destination playlist is
/// only echoed for logging; creating it on the second service happens
/// outside this core.
pub async fn transfer(
    Extension(shared_tracks): Extension<SharedTracks>,
    Json(request): Json<TransferRequest>,
) -> Json<Vec<TransferResponse>> {
    let selected: HashSet<&str> = request
        .selected_track_ids
        .iter()
        .map(String::as_str)
        .collect();

    let retained = shared_tracks.lock().await;
    let responses: Vec<TransferResponse> = retained
        .iter()
        .filter(|track| selected.contains(track.id.as_str()))
        .map(|track| TransferResponse {
            isrc: track.isrc.clone(),
            title: track.name.clone(),
            artist: track.artists.join(", "),
        })
        .collect();

    info!(
        "Prepared {} of {} selected tracks for transfer into '{}'",
        responses.len(),
        request.selected_track_ids.len(),
        request.playlist_name
    );

    Json(responses)
}
