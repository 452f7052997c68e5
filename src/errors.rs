use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Missing or invalid client configuration.
///
/// Surfaced before any network call is made, so a misconfigured run never
/// reaches the token endpoint.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} is empty")]
    Empty(&'static str),
}

/// Failure while exchanging client credentials for an access token.
///
/// All variants are fatal: without a token no catalog request can be made.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("token endpoint returned {0}")]
    Status(StatusCode),
    #[error("malformed token response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("token response did not contain an access token")]
    MissingToken,
}

/// The catalog resource a failed request was addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Playlist,
    Track,
    AudioFeatures,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Playlist => write!(f, "playlist"),
            Resource::Track => write!(f, "track"),
            Resource::AudioFeatures => write!(f, "audio-features"),
        }
    }
}

/// A failed catalog read, carrying the resource kind and identifier.
///
/// Callers decide whether to skip the affected item or abort; the export
/// command skips and logs.
#[derive(Error, Debug)]
#[error("{resource} request for {id} failed: {cause}")]
pub struct CatalogError {
    pub resource: Resource,
    pub id: String,
    #[source]
    pub cause: CatalogCause,
}

impl CatalogError {
    pub fn new(resource: Resource, id: impl Into<String>, cause: CatalogCause) -> Self {
        CatalogError {
            resource,
            id: id.into(),
            cause,
        }
    }
}

/// Underlying cause of a [`CatalogError`].
#[derive(Error, Debug)]
pub enum CatalogCause {
    /// Transport failure while issuing the request or reading the body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status that is not retried.
    #[error("unexpected status {0}")]
    Status(StatusCode),
    /// The response body was not a valid document of the expected shape.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while writing the exported table to disk.
///
/// The in-memory table stays intact, so a caller may retry the export with
/// a different destination.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
