//! # CLI Module
//!
//! The run modes of the launcher, one per command-line flag:
//!
//! - [`setup`] - `--setup`: interactive first-time authorization in a terminal
//! - [`set_default_device`] - `--set-default-device`: pin a playback device
//! - [`browse`] - no flag: pick a playlist (and song) in rofi and play it
//!
//! ## Data Flow
//!
//! ```text
//! Credential file ─→ session() ─→ (refresh when expired) ─→ SpotifyClient
//!                                                               ↓
//!                         rofi menu ─→ Command ─→ Executor ─→ Spotify
//!                                                               ↓
//!                                                        notification
//! ```
//!
//! Every mode returns its failure instead of exiting. `main` shows it once in
//! the selection menu's error display and exits normally.

mod browse;
mod device;
mod setup;

pub use browse::browse;
pub use device::set_default_device;
pub use setup::{setup, setup_from};

use crate::{
    Res,
    error::AppError,
    management::CredentialStore,
    spotify::Authorizer,
    types::Credentials,
    utils,
};

/// Loads the stored credentials and refreshes them when expired.
///
/// # Errors
///
/// - [`AppError::ConfigMissing`] when setup has not been run
/// - [`AppError::Auth`] when the refresh exchange fails
pub async fn session(store: &CredentialStore, authorizer: &Authorizer) -> Res<Credentials> {
    let credentials = store.load().await?.ok_or(AppError::ConfigMissing)?;
    authorizer
        .ensure_fresh(store, credentials, utils::now())
        .await
}
