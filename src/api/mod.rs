//! # API Module
//!
//! HTTP endpoint served by the local redirect listener during
//! `--setup --listen`.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives Spotify's redirect after the user approved the
//!   application and hands the authorization code (or the error Spotify sent)
//!   to the waiting setup flow through a shared [`RedirectSlot`].
//!
//! The route is mounted at the path of the configured redirect URI, so the
//! URI registered with Spotify works unchanged.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use rofi_spotify::api::{RedirectSlot, callback};
//!
//! let slot: RedirectSlot = Default::default();
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .layer(Extension(slot));
//! ```

mod callback;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use callback::callback;

/// Where the callback handler leaves the outcome of the redirect.
pub type RedirectSlot = Arc<Mutex<Option<Result<String, String>>>>;
