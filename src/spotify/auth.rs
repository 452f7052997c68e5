use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};

use crate::{
    config,
    errors::{AuthError, ConfigError},
    types::TokenResponse,
};

/// Client identity for the OAuth 2.0 client-credentials grant.
///
/// Immutable after construction. The pair is validated when the Basic
/// authorization header is built, so a missing or empty credential fails
/// before any network call is attempted.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Loads the credential pair from the environment.
    ///
    /// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` via
    /// [`crate::config`]; either being unset or empty yields a
    /// [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Credentials {
            client_id: config::spotify_client_id()?,
            client_secret: config::spotify_client_secret()?,
        })
    }

    /// Builds the Basic authorization header value for the token exchange.
    ///
    /// The value is `Basic <base64(client_id:client_secret)>` as required by
    /// the token endpoint. Fails with a [`ConfigError`] when either
    /// credential is empty; no network call is made in that case.
    ///
    /// # Example
    ///
    /// ```
    /// let creds = Credentials::new("my-id", "my-secret");
    /// let header = creds.auth_header()?; // "Basic bXktaWQ6bXktc2VjcmV0"
    /// ```
    pub fn auth_header(&self) -> Result<String, ConfigError> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::Empty("SPOTIFY_CLIENT_ID"));
        }
        if self.client_secret.trim().is_empty() {
            return Err(ConfigError::Empty("SPOTIFY_CLIENT_SECRET"));
        }

        let pair = format!("{}:{}", self.client_id, self.client_secret);
        Ok(format!("Basic {}", STANDARD.encode(pair)))
    }
}

/// Exchanges client credentials for an access token.
///
/// Issues a single POST to the token endpoint with the Basic authorization
/// header and a `grant_type=client_credentials` form body, then validates
/// the response: a non-2xx status or a missing/empty `access_token` field
/// is an [`AuthError`], never a panic at a key lookup.
///
/// The returned token is used for the duration of one run; expiry and
/// refresh are deliberately out of scope.
///
/// # Errors
///
/// - [`AuthError::Config`] - credential pair incomplete (no request made)
/// - [`AuthError::Request`] - token endpoint unreachable or body unreadable
/// - [`AuthError::Status`] - token endpoint answered with a non-2xx status
/// - [`AuthError::Parse`] - response body was not a valid token document
/// - [`AuthError::MissingToken`] - 2xx response without an `access_token`
pub async fn request_token(credentials: &Credentials) -> Result<TokenResponse, AuthError> {
    let auth_header = credentials.auth_header()?;

    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header(header::AUTHORIZATION, auth_header)
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::Status(status));
    }

    let body = response.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)?;
    if token.access_token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
