//! Error types for the launcher.

use thiserror::Error;

/// Every failure the launcher can run into.
///
/// Anything that reaches `main` is fatal: it is shown once in the selection
/// menu's error display and the process exits. [`AppError::NothingPlaying`]
/// and [`AppError::Notify`] never get that far, the notification side effect
/// drops them.
#[derive(Debug, Error)]
pub enum AppError {
    /// No usable credentials on disk.
    #[error("Please start rofi-spotify in the command line with --setup")]
    ConfigMissing,

    /// Token exchange failed or returned an unusable payload.
    #[error("Authorization failed: {0}. Please run rofi-spotify --setup again")]
    Auth(String),

    /// The account reports no playback device.
    #[error("No device found where music could get played on")]
    NoDevice,

    /// Spotify reports nothing as currently playing.
    #[error("Nothing is currently playing")]
    NothingPlaying,

    /// A Web API request failed.
    #[error("Spotify request failed: {0}")]
    Api(#[from] reqwest::Error),

    /// The selection menu could not be run.
    #[error("Selection menu failed: {0}")]
    Menu(String),

    /// The desktop notification could not be shown.
    #[error("Notification failed: {0}")]
    Notify(String),

    /// Reading or writing local files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The credential file could not be serialized.
    #[error("Failed to serialize credentials: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configured or pasted URL is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
