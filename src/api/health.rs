use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::spotify::SpotifyClient;

/// Reports that the callback server is up and which path it expects the
/// OAuth redirect on.
pub async fn health(Extension(client): Extension<SpotifyClient>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "callback": client.config().callback_path()
    }))
}
