use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    errors::CatalogError,
    info,
    management::ExportManager,
    spotify::{self, auth::Credentials},
    success,
    types::{PlaylistTrack, TrackRecord},
    utils, warning,
};

/// Number of per-track fetches in flight at once. Kept small to stay
/// polite to the API.
const FETCH_CHUNK_SIZE: usize = 10;

/// Runs a full export of the given playlist.
///
/// Exchanges client credentials for a token, reads the playlist, fetches
/// track metadata and audio features for every entry, and writes the merged
/// rows as CSV to `output` (or a dated default filename).
///
/// Entries are processed in chunks of concurrently spawned fetches whose
/// handles are joined in spawn order, so the output rows follow playlist
/// order regardless of completion order. A failed per-track fetch is logged
/// and skipped; the run continues with the remaining entries.
pub async fn export(playlist_id: String, output: Option<String>) {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Missing client credentials: {}", e);
        }
    };

    info!("Requesting access token...");
    let token = match spotify::auth::request_token(&credentials).await {
        Ok(token) => token.access_token,
        Err(e) => {
            error!("Failed to request access token: {}", e);
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching playlist {}...", playlist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlist = match spotify::playlist::get_playlist(&token, &playlist_id).await {
        Ok(playlist) => playlist,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlist: {}", e);
        }
    };
    pb.finish_and_clear();

    let mut entries: Vec<PlaylistTrack> = Vec::new();
    for item in playlist.tracks.items {
        match item.track {
            Some(track) => entries.push(track),
            None => warning!("Playlist entry without track data, ignoring"),
        }
    }

    info!(
        "Playlist \"{name}\" has {count} tracks",
        name = playlist.name,
        count = entries.len()
    );

    let mut manager = ExportManager::new();

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message("Fetching track audio features...");

    for chunk in entries.chunks(FETCH_CHUNK_SIZE) {
        let mut handles = Vec::new();

        for entry in chunk {
            let track_id = match utils::track_id(entry) {
                Some(id) => id,
                None => {
                    warning!(
                        "Cannot determine track id for \"{}\", skipping",
                        entry.name
                    );
                    manager.skip(entry.name.clone());
                    pb.inc(1);
                    continue;
                }
            };

            let token = token.clone();
            let handle = tokio::spawn(async move {
                let record = fetch_track_record(&token, &track_id).await;
                (track_id, record)
            });
            handles.push(handle);
        }

        // join in spawn order so records stay in playlist order
        for handle in handles {
            match handle.await {
                Ok((_, Ok(record))) => {
                    manager.add(record);
                }
                Ok((track_id, Err(e))) => {
                    warning!("Skipping track {}: {}", track_id, e);
                    manager.skip(track_id);
                }
                Err(e) => {
                    warning!("Task join error: {}", e);
                }
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();

    if !manager.skipped().is_empty() {
        warning!(
            "{} of {} tracks could not be fetched",
            manager.skipped().len(),
            entries.len()
        );
    }

    let output = output.unwrap_or_else(utils::default_output_path);
    match manager.persist(Path::new(&output)).await {
        Ok(_) => success!("Exported {} tracks to {}", manager.count(), output),
        Err(e) => {
            error!("Failed to write {}: {}", output, e);
        }
    }
}

async fn fetch_track_record(token: &str, track_id: &str) -> Result<TrackRecord, CatalogError> {
    let track = spotify::tracks::get_track(token, track_id).await?;
    let features = spotify::tracks::get_audio_features(token, track_id).await?;

    Ok(utils::build_track_record(&track, &features))
}
