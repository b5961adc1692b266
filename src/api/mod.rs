//! # API Module
//!
//! HTTP endpoints of the local server that receives Spotify's OAuth redirect.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code on the redirect URI,
//!   exchanges it for a credential and hands the result to the waiting
//!   login command through shared state.
//! - [`health`] - Returns status and version, handy to check that the
//!   server came up on the configured address.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotlink::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/done", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
