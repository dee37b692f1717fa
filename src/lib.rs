//! Portify Library
//!
//! This library fetches the contents of a Spotify playlist via the Spotify
//! Web API, normalizes the returned metadata into a local [`types::Track`]
//! model, and exposes it for selection and a later cross-service transfer.
//! It backs both a command-line interface and a small HTTP API that a web
//! frontend can call.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served by the local server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Error types and result alias
//! - `server` - Local HTTP server exposing the API endpoints
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use portify::{spotify::SpotifyClient, types::Credentials, utils};
//!
//! #[tokio::main]
//! async fn main() -> portify::errors::Result<()> {
//!     let credentials = Credentials {
//!         client_id: "client-id".into(),
//!         client_secret: "client-secret".into(),
//!     };
//!     let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc";
//!     let playlist_id = utils::extract_playlist_id(url);
//!
//!     let mut client = SpotifyClient::new(credentials);
//!     let tracks = client.playlist_tracks(playlist_id).await?;
//!     println!("fetched {} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a blue "o" indicator followed by the
/// provided message. Used for general information and status updates.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}...", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
///
/// # Example
///
/// ```
/// success!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors at the CLI boundary. The program terminates
/// with exit code 1 immediately after the message is printed, so this macro
/// must not be used from library code.
///
/// # Example
///
/// ```
/// error!("Failed to fetch playlist: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Highlights recoverable issues or important notices that don't require
/// program termination.
///
/// # Example
///
/// ```
/// warning!("Playlist id looks empty, the API call will most likely fail");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
