use std::path::Path;

use crate::{errors::ExportError, types::TrackRecord};

/// Column order of the exported dataset. Matches the field order of
/// [`TrackRecord`].
pub const CSV_HEADER: [&str; 15] = [
    "artist_name",
    "track_name",
    "danceability",
    "energy",
    "key",
    "loudness",
    "mode",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
    "duration_ms",
    "time_signature",
];

/// Owns the table of merged track records for one export run.
///
/// Records are kept in insertion order, which the export command guarantees
/// to be playlist order. Tracks that could not be fetched are recorded by
/// identifier so the run can report what was left out. The table lives in
/// memory until [`persist`](ExportManager::persist) writes it out once at
/// the end of the run.
pub struct ExportManager {
    records: Vec<TrackRecord>,
    skipped: Vec<String>,
}

impl ExportManager {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn add(&mut self, record: TrackRecord) {
        self.records.push(record);
    }

    pub fn skip(&mut self, track_id: impl Into<String>) {
        self.skipped.push(track_id.into());
    }

    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Renders the table as CSV: one header row with the names from
    /// [`CSV_HEADER`], one data row per record. Floats print in Rust's
    /// shortest round-trip form, integers unformatted; text fields
    /// containing delimiter, quote or newline characters are quoted with
    /// doubled inner quotes.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&CSV_HEADER.join(","));
        out.push('\n');

        for record in &self.records {
            out.push_str(&render_row(record));
            out.push('\n');
        }

        out
    }

    /// Writes the rendered CSV to `path`, creating parent directories and
    /// overwriting any existing file.
    ///
    /// The in-memory table is untouched by failure, so the caller may retry
    /// with another destination.
    pub async fn persist(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        async_fs::write(path, self.to_csv()).await?;
        Ok(())
    }
}

fn render_row(record: &TrackRecord) -> String {
    [
        escape_field(&record.artist_name),
        escape_field(&record.track_name),
        record.danceability.to_string(),
        record.energy.to_string(),
        record.key.to_string(),
        record.loudness.to_string(),
        record.mode.to_string(),
        record.speechiness.to_string(),
        record.acousticness.to_string(),
        record.instrumentalness.to_string(),
        record.liveness.to_string(),
        record.valence.to_string(),
        record.tempo.to_string(),
        record.duration_ms.to_string(),
        record.time_signature.to_string(),
    ]
    .join(",")
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
