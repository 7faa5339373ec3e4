//! Rofi Spotify Launcher Library
//!
//! This library drives Spotify playback from a rofi selection menu. It stores
//! OAuth credentials once, keeps the access token fresh, lists playlists and
//! songs in rofi and turns the chosen entry or special key into playback
//! commands for the active Spotify device.
//!
//! # Modules
//!
//! - `api` - HTTP endpoint for the local OAuth redirect listener
//! - `cli` - The three run modes (setup, default device selection, browse)
//! - `config` - Configuration management and environment variables
//! - `error` - The error taxonomy shared by every module
//! - `management` - Credential persistence
//! - `menu` - Selection menu model, rofi integration and command dispatch
//! - `notify` - Desktop notifications
//! - `player` - Translation of menu commands into Spotify calls
//! - `server` - Local HTTP server for the OAuth redirect
//! - `spotify` - Spotify Web API client and authorization
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use rofi_spotify::{cli, config, management::CredentialStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> rofi_spotify::Res<()> {
//!     config::load_env()?;
//!     let store = CredentialStore::new(config::credentials_path());
//!     // Run one of the cli modes...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod menu;
pub mod notify;
pub mod player;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports an [`error::AppError`], so
/// callers can match on the failure kind (missing credentials, no device, ...)
/// instead of inspecting strings.
///
/// # Example
///
/// ```
/// use rofi_spotify::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, error::AppError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Opening the authorization page...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Credentials stored at {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark.
///
/// Unlike a panic this only reports. The launcher always exits with status 0,
/// so the caller decides when to stop.
///
/// # Example
///
/// ```
/// error!("Failed to show the error in rofi: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice, like a browser that
/// could not be opened.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser. Please navigate to:\n{}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
