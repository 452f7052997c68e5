//! Configuration management for the playlist audio-feature exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials and
//! endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only; credentials have none)

use dotenv;
use std::{env, path::PathBuf};

use crate::errors::ConfigError;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spafcli/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// A missing `.env` file is not an error: credentials may equally be supplied
/// through the process environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spafcli/.env`
/// - macOS: `~/Library/Application Support/spafcli/.env`
/// - Windows: `%LOCALAPPDATA%/spafcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready, or an error string if the
/// directory cannot be created or an existing `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use spafcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spafcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains the
/// client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the variable is unset or empty.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    require_env("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret obtained when registering the application with Spotify's
/// developer platform.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the variable is unset or empty.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Result<String, ConfigError> {
    require_env("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// documented production endpoint when unset. This is used for all catalog
/// reads after authentication.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back
/// to the documented production endpoint when unset. This is where client
/// credentials are exchanged for an access token.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::Empty(name)),
        Err(_) => Err(ConfigError::Missing(name)),
    }
}
