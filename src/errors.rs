//! Error types for the library.
//!
//! Failures are grouped into the taxonomy the rest of the crate reports to
//! callers: transport failures, authentication failures, unexpected payload
//! shapes, and configuration problems. None of them are retried; any error
//! aborts the operation that produced it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// A convenient Result type alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Network or IO failure while talking to the Spotify Web API.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The client-credentials exchange was rejected or a request was made
    /// with an invalid grant.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The API answered, but the payload did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A required configuration value is missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::UnexpectedResponse(err.to_string())
        } else if err.status() == Some(StatusCode::UNAUTHORIZED) {
            Error::Authentication(err.to_string())
        } else {
            Error::Transport(err)
        }
    }
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Transport(_) | Error::UnexpectedResponse(_) => StatusCode::BAD_GATEWAY,
            Error::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps an error to the `{"error": "..."}` JSON body the web frontend
/// displays, with a status code matching the failure class.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
