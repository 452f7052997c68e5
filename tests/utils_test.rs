use base64::{Engine, engine::general_purpose::STANDARD};
use spafcli::errors::ConfigError;
use spafcli::spotify::auth::Credentials;
use spafcli::types::{Album, Artist, AudioFeatures, ExternalUrls, PlaylistTrack, TrackResponse};
use spafcli::utils::*;

// Helper function to create a playlist entry with the given id and web url
fn create_playlist_track(id: Option<&str>, url: Option<&str>) -> PlaylistTrack {
    PlaylistTrack {
        id: id.map(|s| s.to_string()),
        name: "Test Track".to_string(),
        artists: vec![Artist {
            id: "artist_id".to_string(),
            name: "Test Artist".to_string(),
        }],
        external_urls: ExternalUrls {
            spotify: url.map(|s| s.to_string()),
        },
    }
}

// Helper function to create a track document with a single album artist
fn create_track_response(artist_name: &str, track_name: &str) -> TrackResponse {
    TrackResponse {
        id: "track_id".to_string(),
        name: track_name.to_string(),
        album: Album {
            name: "Test Album".to_string(),
            artists: vec![Artist {
                id: "artist_id".to_string(),
                name: artist_name.to_string(),
            }],
        },
    }
}

fn create_audio_features() -> AudioFeatures {
    AudioFeatures {
        danceability: 0.75,
        energy: 0.61,
        key: 5,
        loudness: -7.3,
        mode: 1,
        speechiness: 0.041,
        acousticness: 0.12,
        instrumentalness: 0.002,
        liveness: 0.33,
        valence: 0.48,
        tempo: 120.0,
        duration_ms: 210000,
        time_signature: 4,
    }
}

#[test]
fn test_auth_header_encodes_credentials() {
    let creds = Credentials::new("my-id", "my-secret");
    let header = creds.auth_header().unwrap();

    // Should carry the Basic scheme
    assert!(header.starts_with("Basic "));

    // The payload should decode back to exactly client_id:client_secret
    let encoded = header.strip_prefix("Basic ").unwrap();
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "my-id:my-secret");
}

#[test]
fn test_auth_header_rejects_empty_credentials() {
    assert_eq!(
        Credentials::new("", "secret").auth_header().unwrap_err(),
        ConfigError::Empty("SPOTIFY_CLIENT_ID")
    );
    assert_eq!(
        Credentials::new("id", "").auth_header().unwrap_err(),
        ConfigError::Empty("SPOTIFY_CLIENT_SECRET")
    );
    assert!(Credentials::new("", "").auth_header().is_err());
    assert!(Credentials::new("  ", "secret").auth_header().is_err());
}

#[test]
fn test_track_id_from_url() {
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/abc123"),
        Some("abc123".to_string())
    );

    // Query strings and fragments are stripped
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/abc123?si=xyz"),
        Some("abc123".to_string())
    );
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/abc123#top"),
        Some("abc123".to_string())
    );

    // Trailing slash does not change the segment
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/abc123/"),
        Some("abc123".to_string())
    );

    // No usable path segment
    assert_eq!(track_id_from_url("https:"), None);
}

#[test]
fn test_track_id_prefers_structured_id() {
    let track = create_playlist_track(
        Some("structured_id"),
        Some("https://open.spotify.com/track/from_url"),
    );
    assert_eq!(track_id(&track), Some("structured_id".to_string()));
}

#[test]
fn test_track_id_falls_back_to_url() {
    let without_id = create_playlist_track(None, Some("https://open.spotify.com/track/abc123"));
    assert_eq!(track_id(&without_id), Some("abc123".to_string()));

    // Empty structured id counts as absent
    let empty_id = create_playlist_track(Some(""), Some("https://open.spotify.com/track/abc123"));
    assert_eq!(track_id(&empty_id), Some("abc123".to_string()));

    let nothing = create_playlist_track(None, None);
    assert_eq!(track_id(&nothing), None);
}

#[test]
fn test_build_track_record_merges_fields() {
    let track = create_track_response("Artist X", "Song Y");
    let features = create_audio_features();

    let record = build_track_record(&track, &features);

    assert_eq!(record.artist_name, "Artist X");
    assert_eq!(record.track_name, "Song Y");

    // Feature fields are copied verbatim
    assert_eq!(record.danceability, features.danceability);
    assert_eq!(record.energy, features.energy);
    assert_eq!(record.key, 5);
    assert_eq!(record.loudness, features.loudness);
    assert_eq!(record.mode, 1);
    assert_eq!(record.speechiness, features.speechiness);
    assert_eq!(record.acousticness, features.acousticness);
    assert_eq!(record.instrumentalness, features.instrumentalness);
    assert_eq!(record.liveness, features.liveness);
    assert_eq!(record.valence, features.valence);
    assert_eq!(record.tempo, 120.0);
    assert_eq!(record.duration_ms, 210000);
    assert_eq!(record.time_signature, 4);
}

#[test]
fn test_build_track_record_uses_first_album_artist() {
    let mut track = create_track_response("First Artist", "Song");
    track.album.artists.push(Artist {
        id: "artist_2".to_string(),
        name: "Second Artist".to_string(),
    });

    let record = build_track_record(&track, &create_audio_features());
    assert_eq!(record.artist_name, "First Artist");
}

#[test]
fn test_build_track_record_without_album_artist() {
    let mut track = create_track_response("Artist", "Song");
    track.album.artists.clear();

    let record = build_track_record(&track, &create_audio_features());
    assert_eq!(record.artist_name, "");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(210000), "3:30");
    assert_eq!(format_duration(59999), "0:59");
    assert_eq!(format_duration(60000), "1:00");
    assert_eq!(format_duration(0), "0:00");

    // Negative durations clamp to zero
    assert_eq!(format_duration(-5000), "0:00");
}

#[test]
fn test_default_output_path() {
    let path = default_output_path();

    assert!(path.starts_with("tracks-"));
    assert!(path.ends_with(".csv"));

    // The dated part should be YYYY-MM-DD
    let date = path
        .strip_prefix("tracks-")
        .unwrap()
        .strip_suffix(".csv")
        .unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(date.matches('-').count(), 2);
}
