use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tokio::sync::Mutex;

/// Tracks fetched by the HTTP API, retained between the fetch and transfer
/// endpoints.
pub type SharedTracks = Arc<Mutex<Vec<Track>>>;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    // Treat tokens as expired a few minutes early so an in-flight page
    // request never races the actual expiry.
    const EXPIRY_BUFFER_SECS: u64 = 240;

    pub fn from_response(response: TokenResponse) -> Self {
        Token {
            access_token: response.access_token,
            expires_in: response.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in.saturating_sub(Self::EXPIRY_BUFFER_SECS)
    }
}

/// One song pulled from Spotify, reduced to the fields the transfer needs.
///
/// `isrc` stays optional end to end: a missing recording code serializes as
/// `null`, never as an empty string, so downstream matching cannot produce
/// false positives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: String,
    pub isrc: Option<String>,
    pub uri: String,
}

impl Track {
    /// Normalizes a raw API track object. Returns `None` when the object
    /// carries no id, which the API uses for locally-uploaded files.
    pub fn from_api(track: ApiTrack) -> Option<Self> {
        let id = track.id?;
        Some(Track {
            id,
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            album: track.album.name,
            isrc: track
                .external_ids
                .and_then(|ids| ids.get("isrc").cloned()),
            uri: track.uri,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemsPage {
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistEntry>,
}

impl PlaylistItem {
    /// Normalizes one playlist item. Anything that is not a proper track
    /// (episodes, local files, unknown kinds, removed entries) yields `None`.
    pub fn into_track(self) -> Option<Track> {
        match self.track? {
            PlaylistEntry::Track(track) => Track::from_api(track),
            PlaylistEntry::Episode | PlaylistEntry::Local | PlaylistEntry::Unknown => None,
        }
    }
}

/// The kinds of entries a playlist can contain. The API tags entries with a
/// `type` field; local files are tagged `track` as well and are told apart
/// by their `is_local` flag during classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawPlaylistEntry")]
pub enum PlaylistEntry {
    Track(ApiTrack),
    Episode,
    Local,
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawPlaylistEntry {
    Track(ApiTrack),
    Episode,
    #[serde(other)]
    Unknown,
}

impl From<RawPlaylistEntry> for PlaylistEntry {
    fn from(raw: RawPlaylistEntry) -> Self {
        match raw {
            RawPlaylistEntry::Track(track) if track.is_local => PlaylistEntry::Local,
            RawPlaylistEntry::Track(track) => PlaylistEntry::Track(track),
            RawPlaylistEntry::Episode => PlaylistEntry::Episode,
            RawPlaylistEntry::Unknown => PlaylistEntry::Unknown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTrack {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub artists: Vec<ApiArtist>,
    pub album: ApiAlbum,
    #[serde(default)]
    pub external_ids: Option<HashMap<String, String>>,
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchPlaylistRequest {
    pub playlist_url: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchPlaylistResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub playlist_name: String,
    pub selected_track_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResponse {
    pub isrc: Option<String>,
    pub title: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub isrc: String,
}

impl From<&Track> for TrackTableRow {
    fn from(track: &Track) -> Self {
        TrackTableRow {
            name: track.name.clone(),
            artists: track.artists.join(", "),
            album: track.album.clone(),
            isrc: track.isrc.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}
