use reqwest::StatusCode;
use spafcli::errors::{CatalogCause, CatalogError, Resource};
use spafcli::management::{CSV_HEADER, ExportManager};
use spafcli::types::TrackRecord;

// Helper function to create a record with distinguishable identity fields
fn create_record(artist_name: &str, track_name: &str, tempo: f64) -> TrackRecord {
    TrackRecord {
        artist_name: artist_name.to_string(),
        track_name: track_name.to_string(),
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
        tempo,
        duration_ms: 210000,
        time_signature: 4,
    }
}

#[test]
fn test_records_keep_insertion_order() {
    let mut manager = ExportManager::new();
    for i in 0..5 {
        manager.add(create_record("Artist", &format!("Track {}", i), 100.0 + i as f64));
    }

    assert_eq!(manager.count(), 5);

    let names: Vec<&str> = manager
        .records()
        .iter()
        .map(|r| r.track_name.as_str())
        .collect();
    assert_eq!(names, vec!["Track 0", "Track 1", "Track 2", "Track 3", "Track 4"]);
}

#[test]
fn test_csv_header_and_row_count() {
    let mut manager = ExportManager::new();
    manager.add(create_record("A", "One", 100.0));
    manager.add(create_record("B", "Two", 110.0));

    let csv = manager.to_csv();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(
        lines[0],
        "artist_name,track_name,danceability,energy,key,loudness,mode,speechiness,\
         acousticness,instrumentalness,liveness,valence,tempo,duration_ms,time_signature"
    );
    assert!(lines[1].starts_with("A,One,"));
    assert!(lines[2].starts_with("B,Two,"));
}

#[test]
fn test_csv_quotes_special_fields() {
    let mut manager = ExportManager::new();
    manager.add(create_record("Simon, Garfunkel", "Say \"Hi\"", 98.0));

    let csv = manager.to_csv();
    let row = csv.lines().nth(1).unwrap();

    assert!(row.starts_with("\"Simon, Garfunkel\",\"Say \"\"Hi\"\"\","));
}

#[test]
fn test_csv_round_trip() {
    let mut manager = ExportManager::new();
    manager.add(create_record("Artist X", "Song Y", 120.0));
    manager.add(create_record("Artist Z", "Song W", 87.452));
    manager.add(create_record("Artist Q", "Song V", 174.001));

    let csv = manager.to_csv();
    let rows: Vec<Vec<&str>> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').collect())
        .collect();

    assert_eq!(rows.len(), manager.count());

    for (row, record) in rows.iter().zip(manager.records()) {
        assert_eq!(row.len(), CSV_HEADER.len());
        assert_eq!(row[0], record.artist_name);
        assert_eq!(row[1], record.track_name);

        // Floats parse back within tolerance
        let danceability: f64 = row[2].parse().unwrap();
        assert!((danceability - record.danceability).abs() < 1e-9);
        let tempo: f64 = row[12].parse().unwrap();
        assert!((tempo - record.tempo).abs() < 1e-9);

        // Integers parse back exactly
        let key: i64 = row[4].parse().unwrap();
        assert_eq!(key, record.key);
        let mode: i64 = row[6].parse().unwrap();
        assert_eq!(mode, record.mode);
        let duration_ms: i64 = row[13].parse().unwrap();
        assert_eq!(duration_ms, record.duration_ms);
        let time_signature: i64 = row[14].parse().unwrap();
        assert_eq!(time_signature, record.time_signature);
    }
}

#[test]
fn test_skip_and_continue_keeps_remaining_rows() {
    // Five playlist entries of which the third fails to fetch
    let outcomes: Vec<(String, Result<TrackRecord, CatalogError>)> = (0..5)
        .map(|i| {
            let id = format!("track_{}", i);
            let outcome = if i == 2 {
                Err(CatalogError::new(
                    Resource::AudioFeatures,
                    id.clone(),
                    CatalogCause::Status(StatusCode::NOT_FOUND),
                ))
            } else {
                Ok(create_record("Artist", &format!("Track {}", i), 100.0))
            };
            (id, outcome)
        })
        .collect();

    let mut manager = ExportManager::new();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(record) => manager.add(record),
            Err(_) => manager.skip(id),
        }
    }

    assert_eq!(manager.count(), 4);
    assert_eq!(manager.skipped(), ["track_2"]);

    let names: Vec<&str> = manager
        .records()
        .iter()
        .map(|r| r.track_name.as_str())
        .collect();
    assert_eq!(names, vec!["Track 0", "Track 1", "Track 3", "Track 4"]);
}

#[test]
fn test_catalog_error_names_resource_and_id() {
    let err = CatalogError::new(
        Resource::Track,
        "abc123",
        CatalogCause::Status(StatusCode::INTERNAL_SERVER_ERROR),
    );

    let message = err.to_string();
    assert!(message.contains("track"));
    assert!(message.contains("abc123"));
}

#[tokio::test]
async fn test_persist_writes_csv_file() {
    let mut manager = ExportManager::new();
    manager.add(create_record("Artist", "Track", 120.0));

    let dir = std::env::temp_dir().join("spafcli_export_test");
    let path = dir.join("out.csv");

    manager.persist(&path).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(&CSV_HEADER.join(",")));
    assert_eq!(content.lines().count(), 2);

    // Overwrites an existing file on a second run
    manager.persist(&path).await.unwrap();
    let content_again = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, content_again);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_dir(&dir);
}
