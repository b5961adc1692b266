#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use spotlink::{config::Config, spotify::SpotifyClient, types::Credential};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

/// Access tokens the fake accepts.
pub const LIVE_TOKEN: &str = "live";
pub const FRESH_TOKEN: &str = "fresh";

pub const USER_ID: &str = "user-1";
/// Size of the listings published by the `spotify` account.
pub const CATALOG_TOTAL: u32 = 120;

#[derive(Debug, Default)]
pub struct Recorded {
    pub token_auth: Vec<String>,
    pub token_forms: Vec<HashMap<String, String>>,
    pub me_calls: usize,
    pub created: Vec<Value>,
    pub added: Vec<(String, String, Value)>,
    pub searches: Vec<HashMap<String, String>>,
    pub page_queries: Vec<HashMap<String, String>>,
}

type Shared = Arc<Mutex<Recorded>>;

pub struct FakeSpotify {
    pub base: String,
    pub recorded: Shared,
}

impl FakeSpotify {
    pub async fn start() -> Self {
        let recorded: Shared = Arc::default();

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me", get(me))
            .route("/v1/users/{user}/playlists", get(playlists).post(create))
            .route(
                "/v1/users/{user}/playlists/{playlist}/tracks",
                get(playlist_tracks).post(add_tracks),
            )
            .route("/v1/search", get(search))
            .with_state(recorded.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            recorded,
        }
    }

    pub fn config(&self) -> Config {
        let mut config = Config::new(CLIENT_ID, CLIENT_SECRET);
        config.token_url = format!("{}/api/token", self.base);
        config.api_url = format!("{}/v1", self.base);
        config
    }

    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(self.config())
    }

    pub fn recorded(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap()
    }
}

pub fn credential(access_token: &str) -> Credential {
    Credential {
        access_token: access_token.to_string(),
        refresh_token: "refresh-1".to_string(),
        id: USER_ID.to_string(),
    }
}

/// An address nothing listens on.
pub async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn authorized(headers: &HeaderMap) -> Result<(), StatusCode> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match value.strip_prefix("Bearer ") {
        Some(LIVE_TOKEN) | Some(FRESH_TOKEN) => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn token(
    State(recorded): State<Shared>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    {
        let mut recorded = recorded.lock().unwrap();
        recorded.token_auth.push(auth.clone());
        recorded.token_forms.push(form.clone());
    }

    if auth != Config::new(CLIENT_ID, CLIENT_SECRET).basic_auth_header() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    match form.get("grant_type").map(String::as_str) {
        Some("authorization_code") => match form.get("code").map(String::as_str) {
            Some("good-code") => Ok(Json(json!({
                "access_token": LIVE_TOKEN,
                "token_type": "Bearer",
                "scope": "playlist-modify-private playlist-modify-public",
                "expires_in": 3600,
                "refresh_token": "refresh-1"
            }))),
            Some("no-refresh-code") => Ok(Json(json!({
                "access_token": LIVE_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            }))),
            _ => Err(StatusCode::BAD_REQUEST),
        },
        Some("refresh_token") if form.contains_key("refresh_token") => Ok(Json(json!({
            "access_token": FRESH_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        }))),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

async fn me(State(recorded): State<Shared>, headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    recorded.lock().unwrap().me_calls += 1;
    authorized(&headers)?;

    Ok(Json(json!({
        "id": USER_ID,
        "display_name": "Test User",
        "country": "DE",
        "product": "premium"
    })))
}

async fn playlists(
    State(recorded): State<Shared>,
    Path(user): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    authorized(&headers)?;

    if user == "spotify" {
        recorded.lock().unwrap().page_queries.push(query.clone());
        let (limit, offset) = limit_offset(&query);
        let items: Vec<Value> = (offset..(offset + limit).min(CATALOG_TOTAL))
            .map(|i| json!({ "id": format!("sp{}", i), "name": format!("Spotify Mix {}", i) }))
            .collect();
        return Ok(Json(json!({
            "total": CATALOG_TOTAL,
            "limit": limit,
            "offset": offset,
            "items": items
        })));
    }

    Ok(Json(json!({
        "total": 4,
        "limit": 20,
        "offset": 0,
        "next": null,
        "items": [
            { "id": "p1", "name": "Road Trip", "collaborative": false,
              "owner": { "id": user, "display_name": "Test User" }, "tracks": { "total": 12 } },
            { "id": "p2", "name": "road trip", "collaborative": false },
            { "id": "p3", "name": "Road Trip", "collaborative": true },
            { "id": "p4", "name": "Focus", "collaborative": false }
        ]
    })))
}

async fn create(
    State(recorded): State<Shared>,
    Path(_user): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    authorized(&headers)?;
    recorded.lock().unwrap().created.push(body.clone());

    Ok(Json(json!({
        "id": "new-playlist",
        "name": body["name"],
        "public": body["public"],
        "collaborative": false,
        "owner": { "id": USER_ID, "display_name": "Test User" },
        "tracks": { "total": 0 }
    })))
}

async fn playlist_tracks(
    State(recorded): State<Shared>,
    Path((_user, playlist)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    authorized(&headers)?;
    recorded.lock().unwrap().page_queries.push(query.clone());

    let (limit, offset) = limit_offset(&query);
    let items: Vec<Value> = (offset..(offset + limit).min(CATALOG_TOTAL))
        .map(|i| {
            if i == 7 {
                // a track that has been removed from the catalog
                return json!({ "added_at": null, "track": null });
            }
            json!({
                "added_at": "2024-01-01T00:00:00Z",
                "track": {
                    "id": format!("t{}", i),
                    "name": format!("{} track {}", playlist, i),
                    "uri": format!("spotify:track:t{}", i),
                    "duration_ms": 185000,
                    "artists": [{ "id": "a1", "name": "Artist" }],
                    "album": { "id": "al1", "name": "Album" }
                }
            })
        })
        .collect();

    Ok(Json(json!({
        "total": CATALOG_TOTAL,
        "limit": limit,
        "offset": offset,
        "items": items
    })))
}

async fn add_tracks(
    State(recorded): State<Shared>,
    Path((user, playlist)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    authorized(&headers)?;
    recorded.lock().unwrap().added.push((user, playlist, body));

    Ok(Json(json!({ "snapshot_id": "snapshot-2" })))
}

async fn search(
    State(recorded): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    authorized(&headers)?;
    recorded.lock().unwrap().searches.push(query.clone());

    match query.get("type").map(String::as_str) {
        Some("track") => Ok(Json(json!({
            "tracks": {
                "total": 1,
                "items": [{
                    "id": "t1",
                    "name": "Hey Jude",
                    "uri": "spotify:track:t1",
                    "artists": [{ "id": "a1", "name": "The Beatles" }]
                }]
            }
        }))),
        Some("playlist") => Ok(Json(json!({
            "playlists": {
                "total": 2,
                "items": [null, { "id": "pl1", "name": "Beatles Best" }]
            }
        }))),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

fn limit_offset(query: &HashMap<String, String>) -> (u32, u32) {
    let limit = query
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);
    let offset = query
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    (limit, offset)
}
