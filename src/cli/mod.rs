//! # CLI Module
//!
//! User-facing commands of the `spotlink` binary. Each command is a thin
//! layer over [`crate::spotify::SpotifyClient`]: it loads the stored
//! credential, makes sure it is still accepted, calls the client and renders
//! the result.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`login`] - Runs the OAuth authorization code flow and stores the credential
//! - [`logout`] - Removes the stored credential
//! - [`me`] - Shows the profile the stored credential belongs to
//!
//! ### Playlists
//!
//! - [`playlists`] - Lists the user's playlists
//! - [`playlist_id`] - Resolves a playlist name to its id
//! - [`browse`] - Lists every playlist published by Spotify, across all pages
//! - [`tracks`] - Lists every track of a playlist, across all pages
//! - [`create`] - Creates a playlist
//! - [`add`] - Adds tracks to a playlist
//!
//! ### Catalog
//!
//! - [`search`] - Searches tracks, artists, albums or playlists
//!
//! ## Error Handling
//!
//! Commands print failures with the crate's output macros. Unrecoverable
//! ones (no credential, credential refresh failed) end the process through
//! [`crate::error!`].

mod auth;
mod playlist;
mod search;

pub use auth::{login, logout, me};
pub use playlist::{add, browse, create, playlist_id, playlists, tracks};
pub use search::search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, management::CredentialStore, spotify::SpotifyClient, types::Credential, warning,
};

/// Loads the stored credential and makes sure its access token still works.
///
/// A refreshed credential is written back so the next command starts with
/// the new access token.
pub(crate) async fn authenticated_user(client: &SpotifyClient) -> Credential {
    let store = CredentialStore::new();
    let stored = match store.load().await {
        Ok(user) => user,
        Err(e) => {
            error!(
                "Failed to load credential. Please run spotlink login\n Error: {}",
                e
            );
        }
    };

    let user = match client.update_creds(&stored).await {
        Ok(user) => user,
        Err(e) => {
            error!(
                "Failed to refresh credential. Please run spotlink login\n Error: {}",
                e
            );
        }
    };

    if user != stored {
        if let Err(e) = store.persist(&user).await {
            warning!("Failed to save refreshed credential: {}", e);
        }
    }

    user
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
