use crate::{
    config,
    errors::{CatalogError, Resource},
    types::{AudioFeatures, TrackResponse},
};

/// Retrieves a single track document.
///
/// The document carries the track title and the album credit from which the
/// exported `artist_name` is taken.
///
/// # Errors
///
/// Returns a [`CatalogError`] with [`Resource::Track`] on network failure,
/// non-2xx status, or a malformed document.
pub async fn get_track(token: &str, track_id: &str) -> Result<TrackResponse, CatalogError> {
    let api_url = format!(
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    super::get_json(&api_url, token, Resource::Track, track_id).await
}

/// Retrieves the audio-feature vector of a single track.
///
/// # Errors
///
/// Returns a [`CatalogError`] with [`Resource::AudioFeatures`] on network
/// failure, non-2xx status, or a malformed document.
pub async fn get_audio_features(
    token: &str,
    track_id: &str,
) -> Result<AudioFeatures, CatalogError> {
    let api_url = format!(
        "{uri}/audio-features/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    super::get_json(&api_url, token, Resource::AudioFeatures, track_id).await
}
