use reqwest::Client;

use crate::{
    errors::{Error, Result},
    types::{Credentials, Token, TokenResponse},
};

/// Expiry-aware holder of the app-only bearer token.
///
/// Keeps the client credentials together with the most recently obtained
/// token and transparently re-requests one when none is cached or the cached
/// token is about to expire. The manager lives inside a
/// [`SpotifyClient`](super::SpotifyClient), so the playlist aggregation and
/// the single-track lookup share one token instead of re-authenticating per
/// call.
///
/// Tokens are held in memory only. Credentials arrive per request or per CLI
/// invocation, so nothing is persisted to disk.
pub struct SessionManager {
    credentials: Credentials,
    token_url: String,
    token: Option<Token>,
}

impl SessionManager {
    pub fn new(credentials: Credentials, token_url: String) -> Self {
        SessionManager {
            credentials,
            token_url,
            token: None,
        }
    }

    /// Returns a valid access token, performing the client-credentials
    /// exchange when necessary.
    ///
    /// # Errors
    ///
    /// Fails with an authentication error when the token endpoint rejects
    /// the credentials or answers with an unexpected payload, and with a
    /// transport error when the endpoint is unreachable. Failures are not
    /// retried.
    pub async fn access_token(&mut self, http: &Client) -> Result<String> {
        match &self.token {
            Some(token) if !token.is_expired() => Ok(token.access_token.clone()),
            _ => {
                let token = request_token(http, &self.token_url, &self.credentials).await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }
}

/// Exchanges a client id and secret for an app-only bearer token.
///
/// Performs the OAuth client-credentials grant against the token endpoint:
/// the credentials go into an HTTP Basic authorization header, the grant
/// type into the form body. No end-user login is involved; the resulting
/// token only grants access to public catalog data.
pub async fn request_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "token request failed with status {status}: {body}"
        )));
    }

    let token_response = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::Authentication(format!("malformed token response: {e}")))?;

    Ok(Token::from_response(token_response))
}
