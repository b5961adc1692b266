//! Configuration management for the Spotify playlist client.
//!
//! Configuration is read once into a [`Config`] value which is then handed to
//! [`crate::spotify::SpotifyClient`] at construction. Nothing else in the crate
//! reads the environment, so tests can build a `Config` by hand and point it
//! at a local server.
//!
//! Values are looked up in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory
//! 4. Built-in defaults (where applicable)

use std::{env, io::ErrorKind, path::PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::Res;

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3001/done";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/en/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_CALLBACK_PATH: &str = "/done";

/// Scopes requested on login.
pub const LOGIN_SCOPE: &str = "playlist-modify-private playlist-modify-public";

/// Loads environment variables from `.env` files.
///
/// The working directory is checked first, then the platform-specific local
/// data directory under `spotlink/.env`:
/// - Linux: `~/.local/share/spotlink/.env`
/// - macOS: `~/Library/Application Support/spotlink/.env`
/// - Windows: `%LOCALAPPDATA%/spotlink/.env`
///
/// Variables that are already set are never overwritten. A missing file is
/// not an error; an unreadable or malformed one is.
///
/// # Example
///
/// ```
/// use spotlink::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    ignore_missing(dotenv::dotenv())?;

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Treats a missing `.env` file as success and any other failure as an error.
pub(crate) fn ignore_missing<T>(result: dotenv::Result<T>) -> Result<(), String> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Location of the user's `.env` file in the local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlink/.env");
    path
}

/// Settings the Spotify client needs.
///
/// `client_secret` is only ever used to build the Basic authorization header
/// for the token endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// Address the local OAuth callback server binds to.
    pub server_address: String,
    /// Maximum number of trailing page requests in flight at once.
    /// `None` fires them all at once.
    pub page_concurrency: Option<usize>,
}

impl Config {
    /// Creates a configuration with the default Spotify endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            page_concurrency: None,
        }
    }

    /// Builds the configuration from environment variables.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required. The
    /// endpoint URLs, `SERVER_ADDRESS` and `SPOTLINK_PAGE_CONCURRENCY` are
    /// optional overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or
    /// `SPOTLINK_PAGE_CONCURRENCY` is not a positive integer.
    pub fn from_env() -> Res<Self> {
        let mut config = Config::new(
            required("SPOTIFY_CLIENT_ID")?,
            required("SPOTIFY_CLIENT_SECRET")?,
        );

        if let Some(v) = optional("SPOTIFY_REDIRECT_URI") {
            config.redirect_uri = v;
        }
        if let Some(v) = optional("SPOTIFY_API_AUTH_URL") {
            config.auth_url = v;
        }
        if let Some(v) = optional("SPOTIFY_API_TOKEN_URL") {
            config.token_url = v;
        }
        if let Some(v) = optional("SPOTIFY_API_URL") {
            config.api_url = v;
        }
        if let Some(v) = optional("SERVER_ADDRESS") {
            config.server_address = v;
        }
        if let Some(v) = optional("SPOTLINK_PAGE_CONCURRENCY") {
            config.page_concurrency = Some(parse_concurrency(&v)?);
        }

        Ok(config)
    }

    /// Path component of the redirect URI, which is where the local server
    /// listens for the OAuth redirect.
    ///
    /// Falls back to [`DEFAULT_CALLBACK_PATH`] when the redirect URI does not
    /// parse.
    pub fn callback_path(&self) -> String {
        reqwest::Url::parse(&self.redirect_uri)
            .map(|url| url.path().to_string())
            .unwrap_or_else(|_| DEFAULT_CALLBACK_PATH.to_string())
    }

    /// Value for the `Authorization` header of token endpoint requests.
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

fn required(key: &str) -> Res<String> {
    optional(key).ok_or_else(|| format!("{} must be set", key).into())
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_concurrency(value: &str) -> Res<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "SPOTLINK_PAGE_CONCURRENCY must be a positive integer, got '{}'",
            value
        )
        .into()),
    }
}
