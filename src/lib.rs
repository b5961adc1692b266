//! Spotify Playlist Client Library
//!
//! This library wraps the parts of the Spotify Web API needed to log a user in,
//! keep their credential alive, manage their playlists and search the catalog.
//! Every client call maps to exactly one HTTP endpoint; the pagination helper in
//! [`spotify::pages`] is the only place that issues several requests at once.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading from `.env` files and the environment
//! - `management` - Local persistence of the user's credential
//! - `server` - Local HTTP server receiving the OAuth redirect
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotlink::{config::Config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotlink::Res<()> {
//!     spotlink::config::load_env().await?;
//!     let client = SpotifyClient::new(Config::from_env()?);
//!     println!("{}", client.login_screen_url());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used wherever more than one kind of failure can meet, e.g. a token
/// exchange followed by a profile lookup, or configuration parsing. Single
/// HTTP calls return `reqwest::Error` directly.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlists...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command layer. Library code propagates its errors
/// instead of calling this.
///
/// # Example
///
/// ```
/// error!("No stored credential. Run spotlink login first.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
