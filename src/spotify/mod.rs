//! # Spotify Integration Module
//!
//! A thin client for the Spotify Web API. [`SpotifyClient`] owns the injected
//! [`Config`] and a pooled `reqwest` client; each submodule adds the calls for
//! one area of the API as an `impl SpotifyClient` block:
//!
//! ```text
//! Application Layer (CLI, callback server)
//!          ↓
//! SpotifyClient
//!     ├── auth      (login URL, code exchange, refresh, credential check)
//!     ├── user      (profile)
//!     ├── playlist  (list, resolve, create, tracks, add)
//!     ├── search    (catalog search)
//!     └── pages     (fan-out over paginated listings)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Request Model
//!
//! Every call issues exactly one request, checks the status with
//! `error_for_status` and decodes the body into its response type from
//! [`crate::types`]. Failures are returned as `reqwest::Error` whether they
//! came from the network, a non-success status or an undecodable body. There
//! is no retry, rate-limit handling or timeout anywhere in this module.
//!
//! ## Authentication
//!
//! Resource endpoints use the credential's access token as a Bearer token.
//! The token endpoint uses HTTP Basic auth built from the client id and
//! secret. Credentials are never stored here; the caller owns them.
//!
//! ## Example
//!
//! ```rust
//! let client = SpotifyClient::new(Config::from_env()?);
//! let user = client.update_creds(&stored).await?;
//!
//! let pending = client
//!     .get_all_request_pages(&user, {
//!         let client = client.clone();
//!         move |user, offset| {
//!             let client = client.clone();
//!             async move { client.get_playlist_page(&user, offset).await }
//!         }
//!     })
//!     .await?;
//! let playlists = pages::collect_items(pending).await?;
//! ```

use reqwest::{Client, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, types::Credential};

pub mod auth;
pub mod pages;
pub mod playlist;
pub mod search;
pub mod user;

/// Spotify Web API client.
///
/// Cheap to clone: the underlying connection pool is shared between clones,
/// which is what page-request closures rely on.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{base}{path}",
            base = self.config.api_url.trim_end_matches('/'),
            path = path
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        user: &Credential,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, reqwest::Error> {
        self.http
            .get(self.api_url(path))
            .bearer_auth(&user.access_token)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        user: &Credential,
        path: &str,
        body: &B,
    ) -> Result<T, reqwest::Error> {
        self.http
            .post(self.api_url(path))
            .bearer_auth(&user.access_token)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }

    async fn post_token_form<T: DeserializeOwned>(
        &self,
        form: &[(&str, &str)],
    ) -> Result<T, reqwest::Error> {
        self.http
            .post(&self.config.token_url)
            .header(AUTHORIZATION, self.config.basic_auth_header())
            .form(form)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
