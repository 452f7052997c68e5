use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    spotify::{self, auth::Credentials},
    types::TrackTableRow,
};

/// Prints a summary of the given playlist: name, owner, entry count, and a
/// table of its tracks. Uses only the playlist read, so it is a cheap way
/// to check what an export run would cover.
pub async fn info(playlist_id: String) {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Missing client credentials: {}", e);
        }
    };

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

    let owner = playlist
        .owner
        .map(|o| o.display_name.unwrap_or(o.id))
        .unwrap_or_default();

    let table_rows: Vec<TrackTableRow> = playlist
        .tracks
        .items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            position: i + 1,
            track: track.name.clone(),
            artists: track
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<String>>()
                .join(", "),
        })
        .collect();

    info!("Playlist: {}", playlist.name);
    if !owner.is_empty() {
        info!("Owner: {}", owner);
    }
    info!(
        "Tracks: {}",
        playlist.tracks.total.unwrap_or(table_rows.len() as u64)
    );

    let table = Table::new(table_rows);
    println!("{}", table);
}
