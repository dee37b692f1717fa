//! Configuration management for Portify.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It covers the Spotify Web API
//! endpoints, the app credentials used by the CLI commands, and the bind
//! address of the local HTTP server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, falling back to the working
//!    directory
//! 3. Application defaults (API endpoints, server address)

use std::{env, path::PathBuf};

use crate::errors::{Error, Result};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `portify/.env`. When that file is absent, a
/// `.env` in the current working directory is tried instead; already-set
/// process environment variables always win.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/portify/.env`
/// - macOS: `~/Library/Application Support/portify/.env`
/// - Windows: `%LOCALAPPDATA%/portify/.env`
///
/// # Errors
///
/// Returns a configuration error if the parent directory cannot be created.
pub async fn load_env() -> Result<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("portify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Configuration(e.to_string()))?;
    }

    if dotenv::from_path(&path).is_err() {
        // No file in the data directory; a .env in the working directory
        // is the usual development setup.
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Returns the bind address for the local HTTP server.
///
/// Reads the `SERVER_ADDRESS` environment variable, defaulting to
/// `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, defaulting to the
/// public `https://api.spotify.com/v1` endpoint. Overriding this is only
/// useful when pointing the client at a test double.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting to
/// the public `https://accounts.spotify.com/api/token` endpoint. This is
/// where client credentials are exchanged for an app-only bearer token.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify API client ID used by the CLI commands.
///
/// Reads the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable. The HTTP
/// API does not use this value; it receives credentials per request.
///
/// # Errors
///
/// Returns a configuration error when the variable is not set.
pub fn spotify_client_id() -> Result<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .map_err(|_| Error::Configuration("SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string()))
}

/// Returns the Spotify API client secret used by the CLI commands.
///
/// Reads the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable. The
/// secret should be kept confidential and never exposed in logs or version
/// control.
///
/// # Errors
///
/// Returns a configuration error when the variable is not set.
pub fn spotify_client_secret() -> Result<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET")
        .map_err(|_| Error::Configuration("SPOTIFY_API_AUTH_CLIENT_SECRET must be set".to_string()))
}
