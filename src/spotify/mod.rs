//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! exporter: client-credentials authentication and the three catalog reads
//! (playlist, track, audio features). It handles all HTTP communication,
//! response validation, and retry behavior, presenting a small typed surface
//! to the CLI layer.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Playlist Operations (track listing)
//!     └── Track Operations (metadata, audio features)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The exporter authenticates as an application, not on behalf of a user,
//! using the OAuth 2.0 client-credentials grant:
//!
//! 1. **Credential Loading**: Client ID and secret come from the environment
//! 2. **Token Exchange**: A single POST to the token endpoint with a Basic
//!    authorization header yields a bearer token
//! 3. **Bearer Usage**: Every catalog read presents the token in an
//!    `Authorization: Bearer` header
//!
//! The token is used for the duration of one run and never refreshed; all
//! reads a run performs complete well within the token's lifetime.
//!
//! ## Error Handling
//!
//! Every call validates the HTTP status before decoding the body. Failures
//! surface as the typed kinds in [`crate::errors`]:
//!
//! - **Rate Limiting**: 429 responses honor the `Retry-After` header within
//!   a bounded number of attempts
//! - **Transient Upstream Errors**: 502 responses are retried after a short
//!   delay
//! - **Everything Else**: propagated to the caller, which decides between
//!   skip-and-continue (per-track reads) and aborting the run (token,
//!   playlist)
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /playlists/{id}` - playlist document with ordered track entries
//! - `GET /tracks/{id}` - track document with album credit
//! - `GET /audio-features/{id}` - per-track audio-feature vector
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON deserialization into the types of [`crate::types`]
//! - **base64** - Basic authorization header encoding
//! - **tokio** - async runtime and retry delays

pub mod auth;
pub mod playlist;
pub mod tracks;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::errors::{CatalogCause, CatalogError, Resource};

const MAX_ATTEMPTS: u32 = 3;
const RETRY_AFTER_CAP_SECS: u64 = 120;

/// Issues an authenticated GET and decodes the JSON body.
///
/// Shared by all catalog reads. Retries bounded: 429 waits out the
/// `Retry-After` header (capped at [`RETRY_AFTER_CAP_SECS`]), 502 sleeps ten
/// seconds, both at most [`MAX_ATTEMPTS`] tries in total. Any other non-2xx
/// status, transport failure, or undecodable body is returned as a
/// [`CatalogError`] tagged with the resource kind and identifier.
pub(crate) async fn get_json<T: DeserializeOwned>(
    api_url: &str,
    token: &str,
    resource: Resource,
    id: &str,
) -> Result<T, CatalogError> {
    let client = Client::new();
    let mut attempt = 0;

    loop {
        attempt += 1;

        let response = match client.get(api_url).bearer_auth(token).send().await {
            Ok(resp) => resp,
            Err(err) => return Err(CatalogError::new(resource, id, CatalogCause::Http(err))),
        };

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_ATTEMPTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(1);

            if retry_after <= RETRY_AFTER_CAP_SECS {
                sleep(Duration::from_secs(retry_after)).await;
                continue;
            }
            return Err(CatalogError::new(resource, id, CatalogCause::Status(status)));
        }

        if status == StatusCode::BAD_GATEWAY && attempt < MAX_ATTEMPTS {
            sleep(Duration::from_secs(10)).await;
            continue; // retry
        }

        if !status.is_success() {
            return Err(CatalogError::new(resource, id, CatalogCause::Status(status)));
        }

        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::new(resource, id, CatalogCause::Http(err)))?;

        return serde_json::from_str::<T>(&body)
            .map_err(|err| CatalogError::new(resource, id, CatalogCause::Parse(err)));
    }
}
