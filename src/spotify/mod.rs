//! # Spotify Integration Module
//!
//! This module implements the interface to the Spotify Web API that Portify
//! needs: authenticating with an app-only client-credentials grant, walking
//! the paged playlist-items listing, and looking up single tracks. It hides
//! the HTTP requests and JSON payloads behind a small client type and hands
//! the rest of the application normalized [`Track`](crate::types::Track)
//! records.
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials token exchange and the expiry-aware
//!   session manager shared by all operations on a client.
//! - `playlist` - Paged aggregation over `GET /playlists/{id}/tracks`.
//! - `track` - Single-track lookup via `GET /tracks/{id}`.
//!
//! ## Authentication Strategy
//!
//! All operations use the OAuth client-credentials grant: the application
//! authenticates itself with its client id and secret, no end-user login or
//! session is involved. A [`SessionManager`] caches the obtained bearer
//! token and re-requests it when expired, so consecutive operations on one
//! client do not repeat the token round-trip.
//!
//! ## Error Handling
//!
//! There are no retries and no partial results. Transport failures, rejected
//! credentials, and malformed payloads each surface as a distinct
//! [`errors::Error`](crate::errors::Error) variant and abort the whole
//! operation. Rate-limit responses propagate like any other API error.

pub mod auth;
pub mod playlist;
pub mod track;

pub use auth::SessionManager;

use reqwest::Client;

use crate::{config, types::Credentials};

/// Client for the Spotify Web API operations Portify performs.
///
/// Holds the HTTP client, the API base URL, and the token session shared by
/// the playlist aggregation and single-track lookup.
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    pub(crate) session: SessionManager,
}

impl SpotifyClient {
    /// Creates a client against the configured Spotify endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(
            credentials,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        )
    }

    /// Creates a client against explicit endpoint URLs.
    ///
    /// `api_url` is the Web API base (no trailing slash), `token_url` the
    /// full token endpoint URL.
    pub fn with_endpoints(credentials: Credentials, api_url: String, token_url: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url,
            session: SessionManager::new(credentials, token_url),
        }
    }
}
