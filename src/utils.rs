use chrono::Utc;

use crate::types::{AudioFeatures, PlaylistTrack, TrackRecord, TrackResponse};

/// Derives the catalog identifier for a playlist entry.
///
/// Prefers the structured `id` field of the entry. Entries that lack it
/// (local files, relinked tracks from older API payloads) fall back to the
/// last path segment of the track's public web URL.
pub fn track_id(track: &PlaylistTrack) -> Option<String> {
    if let Some(id) = &track.id {
        if !id.is_empty() {
            return Some(id.clone());
        }
    }

    track
        .external_urls
        .spotify
        .as_deref()
        .and_then(track_id_from_url)
}

/// Extracts a track identifier from a public web URL such as
/// `https://open.spotify.com/track/abc123`.
///
/// The identifier is the last path segment with any query string or fragment
/// stripped. Returns `None` when the URL has no usable segment.
pub fn track_id_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.trim_end_matches('/').rsplit('/').next()?;

    if segment.is_empty() || segment.contains(':') {
        return None;
    }
    Some(segment.to_string())
}

/// Merges a track document and its audio-feature vector into one flat record.
///
/// `artist_name` is the first artist of the track's album credit and
/// `track_name` the track title; the thirteen feature fields are copied
/// verbatim from the audio-feature document.
pub fn build_track_record(track: &TrackResponse, features: &AudioFeatures) -> TrackRecord {
    let artist_name = track
        .album
        .artists
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_default();

    TrackRecord {
        artist_name,
        track_name: track.name.clone(),
        danceability: features.danceability,
        energy: features.energy,
        key: features.key,
        loudness: features.loudness,
        mode: features.mode,
        speechiness: features.speechiness,
        acousticness: features.acousticness,
        instrumentalness: features.instrumentalness,
        liveness: features.liveness,
        valence: features.valence,
        tempo: features.tempo,
        duration_ms: features.duration_ms,
        time_signature: features.time_signature,
    }
}

/// Formats a millisecond duration as `m:ss` for display.
pub fn format_duration(duration_ms: i64) -> String {
    let total_secs = duration_ms.max(0) / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Default output filename for an export run, dated so repeated runs don't
/// silently clobber yesterday's dataset.
pub fn default_output_path() -> String {
    format!("tracks-{}.csv", Utc::now().format("%Y-%m-%d"))
}
