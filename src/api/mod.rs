//! # API Module
//!
//! HTTP endpoints served by the local server, consumed by the web frontend:
//!
//! - [`fetch_playlist`] - `POST /api/spotify/playlist`: resolves the playlist
//!   id from the submitted URL, fetches all tracks with the submitted
//!   credentials, retains them in the shared store, and returns them as JSON.
//! - [`transfer`] - `POST /api/spotify/transfer`: flattens the selected
//!   tracks of the last fetch into `(isrc, title, artist)` triples for the
//!   destination-service transfer. The destination side itself is not
//!   implemented here.
//! - [`health`] - `GET /health`: application status and version.
//!
//! Handlers return [`errors::Error`](crate::errors::Error) on failure, which
//! maps to a status code and an `{"error": "..."}` JSON body.

mod health;
mod playlist;
mod transfer;

pub use health::health;
pub use playlist::fetch_playlist;
pub use transfer::transfer;
