use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    error, info,
    management::CredentialStore,
    server::serve_login,
    spotify::SpotifyClient,
    success,
    types::{Credential, LoginState},
    warning,
};

const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

pub async fn login(client: &SpotifyClient) {
    let state: Arc<Mutex<LoginState>> = Arc::new(Mutex::new(LoginState::default()));

    let server_client = client.clone();
    let server_state = Arc::clone(&state);
    let server = tokio::spawn(serve_login(server_client, server_state));

    let login_url = client.login_screen_url();
    if webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        );
    } else {
        info!("Waiting for Spotify to redirect back...");
    }

    let result = wait_for_credential(state).await;
    server.abort();

    match result {
        Ok(user) => {
            if let Err(e) = CredentialStore::new().persist(&user).await {
                error!("Failed to save credential: {}", e);
            }
            success!("Logged in as {}", user.id);
        }
        Err(e) => error!("Login failed: {}", e),
    }
}

async fn wait_for_credential(state: Arc<Mutex<LoginState>>) -> Result<Credential, String> {
    let start = tokio::time::Instant::now();

    while start.elapsed() < LOGIN_TIMEOUT {
        {
            let lock = state.lock().await;
            if let Some(user) = &lock.credential {
                return Ok(user.clone());
            }
            if let Some(e) = &lock.error {
                return Err(e.clone());
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Err("timed out waiting for the authorization redirect".to_string())
}

pub async fn logout() {
    match CredentialStore::new().clear().await {
        Ok(()) => success!("Stored credential removed."),
        Err(e) => warning!("No credential removed: {}", e),
    }
}

pub async fn me(client: &SpotifyClient) {
    let user = super::authenticated_user(client).await;

    match client.get_user_info(&user).await {
        Ok(profile) => {
            info!("id:      {}", profile.id);
            info!("name:    {}", profile.display_name.unwrap_or_default());
            info!("email:   {}", profile.email.unwrap_or_default());
            info!("country: {}", profile.country.unwrap_or_default());
            info!("plan:    {}", profile.product.unwrap_or_default());
        }
        Err(e) => error!("Failed to fetch profile: {}", e),
    }
}
