//! # Spotify Integration Module
//!
//! This module is the boundary between the launcher and the Spotify Web API.
//! Everything the menu and the command executor need from Spotify goes through
//! the [`Gateway`] trait, and [`SpotifyClient`] implements it over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (setup, default device, browse)
//!          ↓
//! Player Layer (command executor)
//!          ↓
//! Gateway trait
//!     ├── SpotifyClient (Web API over reqwest)
//!     └── Authorizer (token endpoint)
//!          ↓
//! Spotify Web API / Accounts service
//! ```
//!
//! ## Core Modules
//!
//! ### Authorization
//!
//! [`auth`] - OAuth 2.0 authorization code flow with a client secret:
//! - **Setup**: builds the authorization URL and exchanges the returned code
//! - **Refresh**: renews the access token before any API call once it expired
//! - **Persistence hand-off**: returns complete credentials for the store
//!
//! ### Web API Client
//!
//! [`client`] - Devices, playlists, playlist tracks, playback state and the
//! transport commands (play, pause, resume, next, previous, shuffle, repeat).
//!
//! ## Error Handling Philosophy
//!
//! Nothing in this module retries. A failed request surfaces as
//! [`crate::error::AppError::Api`], a failed token exchange as
//! [`crate::error::AppError::Auth`], and the caller reports it once.
//!
//! ## API Coverage
//!
//! - `GET /me/player/devices` - Available playback devices
//! - `GET /me/playlists` - The user's playlists (all pages)
//! - `GET /playlists/{id}/tracks` - Tracks of a playlist (all pages)
//! - `GET /me/player/currently-playing` - The item currently playing
//! - `GET /me/player` - Playback state
//! - `PUT /me/player/play` - Start a context or resume
//! - `PUT /me/player/pause` - Pause
//! - `POST /me/player/next`, `POST /me/player/previous` - Skip
//! - `PUT /me/player/shuffle`, `PUT /me/player/repeat` - Playback modes
//! - `POST /api/token` - Token exchange and refresh

pub mod auth;
pub mod client;

pub use auth::Authorizer;
pub use client::SpotifyClient;

use crate::{
    Res,
    types::{Device, Playlist, PlaylistTrack, RepeatState, Track},
};

/// The Spotify calls the launcher makes once it holds a valid access token.
///
/// Calls complete one after another; implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn list_devices(&self) -> Res<Vec<Device>>;

    async fn list_playlists(&self) -> Res<Vec<Playlist>>;

    /// Playable tracks of `playlist` with their playlist positions.
    async fn list_tracks(&self, playlist: &Playlist) -> Res<Vec<PlaylistTrack>>;

    /// The item currently playing, `None` when nothing is.
    async fn currently_playing(&self) -> Res<Option<Track>>;

    async fn is_playing(&self) -> Res<bool>;

    /// Starts `context` on `device`, at zero-based track `offset` when given.
    async fn play(&self, context: &Playlist, device: &Device, offset: Option<usize>) -> Res<()>;

    async fn pause(&self) -> Res<()>;

    async fn resume(&self) -> Res<()>;

    async fn next(&self, device: Option<&Device>) -> Res<()>;

    async fn previous(&self) -> Res<()>;

    async fn shuffle(&self, state: bool, device: &Device) -> Res<()>;

    async fn set_repeat(&self, state: RepeatState, device: &Device) -> Res<()>;
}
