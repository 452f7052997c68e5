use crate::{
    config,
    errors::{CatalogError, Resource},
    types::PlaylistResponse,
};

/// Retrieves a playlist document from the Spotify Web API.
///
/// The document contains the playlist's ordered track entries; entries whose
/// track is no longer resolvable carry a null track and are filtered by the
/// caller. Only the first page of entries is requested.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Identifier of the playlist to read
///
/// # Errors
///
/// Returns a [`CatalogError`] with [`Resource::Playlist`] on network
/// failure, non-2xx status, or a malformed document.
pub async fn get_playlist(
    token: &str,
    playlist_id: &str,
) -> Result<PlaylistResponse, CatalogError> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    super::get_json(&api_url, token, Resource::Playlist, playlist_id).await
}
