use serde_json::json;
use spotlink::management::CredentialStore;
use spotlink::types::{ArtistRef, Credential, PlaylistItem, SearchResponse, SearchType};
use spotlink::utils::*;

fn test_credential() -> Credential {
    Credential {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        id: "user".to_string(),
    }
}

#[test]
fn test_parse_track_uri_accepts_uri() {
    assert_eq!(
        parse_track_uri("spotify:track:4uLU6hMCjMI75M1A2tKUQC").unwrap(),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_parse_track_uri_accepts_links() {
    assert_eq!(
        parse_track_uri("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123").unwrap(),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
    assert_eq!(
        parse_track_uri("https://open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC").unwrap(),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_parse_track_uri_accepts_bare_id() {
    assert_eq!(
        parse_track_uri("  4uLU6hMCjMI75M1A2tKUQC ").unwrap(),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_parse_track_uri_rejects_other_input() {
    assert!(parse_track_uri("").is_err());
    assert!(parse_track_uri("https://open.spotify.com/album/1A2GTWGtFfWp7KSQTwWOyo").is_err());
    assert!(parse_track_uri("spotify:track:").is_err());
    assert!(parse_track_uri("not a track").is_err());
}

#[test]
fn test_insertion_batches_keep_order_when_inserted_at_top() {
    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:t{}", i)).collect();

    let batches: Vec<&[String]> = insertion_batches(&uris).collect();
    assert_eq!(
        batches.iter().map(|b| b.len()).collect::<Vec<_>>(),
        vec![50, ADD_TRACKS_LIMIT, ADD_TRACKS_LIMIT]
    );

    // every request inserts its batch at position 0
    let mut playlist = vec!["spotify:track:existing".to_string()];
    for batch in batches {
        playlist.splice(0..0, batch.iter().cloned());
    }
    assert_eq!(&playlist[..250], &uris[..]);
    assert_eq!(playlist[250], "spotify:track:existing");
}

#[test]
fn test_insertion_batches_small_and_empty() {
    let uris = vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()];
    let batches: Vec<&[String]> = insertion_batches(&uris).collect();
    assert_eq!(batches, vec![&uris[..]]);
    assert_eq!(insertion_batches(&[]).count(), 0);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(185_000), "3:05");
    assert_eq!(format_duration(3_600_999), "60:00");
}

#[test]
fn test_artist_names() {
    let artists = vec![
        ArtistRef {
            id: None,
            name: "Simon".to_string(),
        },
        ArtistRef {
            id: Some("g".to_string()),
            name: "Garfunkel".to_string(),
        },
    ];
    assert_eq!(artist_names(&artists), "Simon, Garfunkel");
    assert_eq!(artist_names(&[]), "");
}

#[test]
fn test_track_rows_skip_removed_tracks() {
    let items: Vec<PlaylistItem> = serde_json::from_value(json!([
        { "added_at": null, "track": null },
        {
            "added_at": "2024-01-01T00:00:00Z",
            "track": {
                "id": "t1",
                "name": "Song",
                "uri": "spotify:track:t1",
                "duration_ms": 61000,
                "artists": [{ "id": "a", "name": "Band" }],
                "album": { "id": "al", "name": "Record" }
            }
        }
    ]))
    .unwrap();

    let rows = track_rows(items);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Song");
    assert_eq!(rows[0].artists, "Band");
    assert_eq!(rows[0].album, "Record");
    assert_eq!(rows[0].length, "1:01");
}

#[test]
fn test_search_rows_flatten_sections() {
    let response: SearchResponse = serde_json::from_value(json!({
        "artists": {
            "total": 1,
            "items": [{ "id": "a1", "name": "Band", "genres": ["rock", "pop", "jazz", "folk"] }]
        },
        "playlists": {
            "total": 2,
            "items": [null, { "id": "p1", "name": "Mix", "owner": { "id": "o", "display_name": "Owner" } }]
        }
    }))
    .unwrap();

    let rows = search_rows(response);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].detail, "rock, pop, jazz");
    assert_eq!(rows[1].name, "Mix");
    assert_eq!(rows[1].detail, "Owner");
}

#[test]
fn test_search_type_display() {
    assert_eq!(SearchType::Track.to_string(), "track");
    assert_eq!(SearchType::Playlist.to_string(), "playlist");
}

#[test]
fn test_credential_uses_camel_case_keys() {
    let value = serde_json::to_value(test_credential()).unwrap();
    assert_eq!(
        value,
        json!({ "accessToken": "access", "refreshToken": "refresh", "id": "user" })
    );
}

#[tokio::test]
async fn test_credential_store_persists_and_loads() {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::at(dir.path().join("nested/credentials.json"));

    assert!(store.load().await.is_err());

    store.persist(&test_credential()).await.unwrap();
    assert_eq!(store.load().await.unwrap(), test_credential());

    store.clear().await.unwrap();
    assert!(store.load().await.is_err());
}
