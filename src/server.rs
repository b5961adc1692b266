use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use crate::{Res, api, spotify::SpotifyClient, types::LoginState};

/// Routes of the local login server. The callback is served on the path of
/// the configured redirect URI.
pub fn router(client: SpotifyClient, state: Arc<Mutex<LoginState>>) -> Router {
    let callback_path = client.config().callback_path();

    Router::new()
        .route("/health", get(api::health))
        .route(&callback_path, get(api::callback))
        .layer(Extension(state))
        .layer(Extension(client))
}

/// Serves the callback routes on the configured server address until the
/// task is dropped.
pub async fn start_api_server(client: SpotifyClient, state: Arc<Mutex<LoginState>>) -> Res<()> {
    let addr = SocketAddr::from_str(&client.config().server_address)?;
    let app = router(client, state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Runs [`start_api_server`] for a pending login.
///
/// If the server cannot start or stops with an error, the failure is stored
/// in the login state so whoever waits on it does not wait in vain.
pub async fn serve_login(client: SpotifyClient, state: Arc<Mutex<LoginState>>) {
    if let Err(e) = start_api_server(client, Arc::clone(&state)).await {
        state.lock().await.error = Some(format!("callback server stopped: {}", e));
    }
}
