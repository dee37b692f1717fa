//! # CLI Module
//!
//! User-facing command implementations. Each command delegates to the
//! Spotify client and presents results with the colored console macros and
//! `tabled` tables; unrecoverable failures terminate via the `error!` macro.
//!
//! ## Commands
//!
//! - [`fetch`] - Fetch all tracks of a playlist URL and print them
//! - [`track`] - Look up a single track by its Spotify ID
//! - [`serve`] - Run the local HTTP API server
//!
//! The fetch and track commands read the app credentials from the
//! environment (`SPOTIFY_API_AUTH_CLIENT_ID` / `_SECRET`); the server
//! instead receives credentials per request from its callers.

mod fetch;
mod serve;
mod track;

pub use fetch::fetch;
pub use serve::serve;
pub use track::track;

use crate::{config, errors::Result, types::Credentials};

fn credentials_from_env() -> Result<Credentials> {
    Ok(Credentials {
        client_id: config::spotify_client_id()?,
        client_secret: config::spotify_client_secret()?,
    })
}
