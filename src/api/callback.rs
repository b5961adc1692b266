use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify::SpotifyClient, types::LoginState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(client): Extension<SpotifyClient>,
    Extension(shared_state): Extension<Arc<Mutex<LoginState>>>,
) -> Html<&'static str> {
    if let Some(reason) = params.get("error") {
        warning!("Authorization was denied: {}", reason);
        shared_state.lock().await.error = Some(reason.clone());
        return Html("<h4>Login was denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    match client.get_user_creds(code).await {
        Ok(user) => {
            shared_state.lock().await.credential = Some(user);
            Html("<h2>Login successful.</h2><p>You can close this window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            shared_state.lock().await.error = Some(e.to_string());
            Html("<h4>Login failed.</h4>")
        }
    }
}
