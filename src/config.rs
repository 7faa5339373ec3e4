//! Configuration management for the rofi Spotify launcher.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. Credentials are not part
//! of this: they live in the credential file managed by
//! [`crate::management::CredentialStore`], whose location is resolved here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the configuration directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::{Res, menu::MenuDepth};

const APP_DIR: &str = "rofi-spotify";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_NOTIFY_DELAY_MS: u64 = 300;
pub const DEFAULT_ROFI_BIN: &str = "rofi";

/// Loads environment variables from a `.env` file in the configuration directory.
///
/// The file is looked up at:
/// - Linux: `~/.config/rofi-spotify/.env`
/// - macOS: `~/Library/Application Support/rofi-spotify/.env`
/// - Windows: `%APPDATA%/rofi-spotify/.env`
///
/// A missing file is fine, every setting has a default.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
///
/// # Example
///
/// ```
/// use rofi_spotify::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Res<()> {
    let path = app_dir().join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(())
}

fn app_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the path of the credential file.
///
/// Defaults to `<config dir>/rofi-spotify/config`, overridable through
/// `ROFI_SPOTIFY_CONFIG`.
///
/// # Example
///
/// ```
/// let path = credentials_path(); // e.g., "/home/me/.config/rofi-spotify/config"
/// ```
pub fn credentials_path() -> PathBuf {
    match env::var("ROFI_SPOTIFY_CONFIG") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => app_dir().join("config"),
    }
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to the public endpoint.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads `SPOTIFY_API_AUTH_URL`. This is the page the browser is sent to during
/// `--setup`.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`. Both the authorization code exchange and the
/// refresh token exchange post here.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns how long to wait before looking up the track to announce.
///
/// Spotify needs a moment after a transport command before "currently
/// playing" reflects it. Reads `ROFI_SPOTIFY_NOTIFY_DELAY_MS`, default 300.
pub fn notify_delay() -> Duration {
    let millis = env::var("ROFI_SPOTIFY_NOTIFY_DELAY_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_NOTIFY_DELAY_MS);
    Duration::from_millis(millis)
}

/// Returns the configured menu depth.
///
/// Reads `ROFI_SPOTIFY_MENU_DEPTH` (`flat` or `drilldown`). Unknown values fall
/// back to the default drilldown menu.
pub fn menu_depth() -> MenuDepth {
    env::var("ROFI_SPOTIFY_MENU_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// Returns the selection menu binary, `ROFI_SPOTIFY_ROFI` or `rofi`.
pub fn rofi_bin() -> String {
    var_or("ROFI_SPOTIFY_ROFI", DEFAULT_ROFI_BIN)
}
