//! Configuration management for playsort.
//!
//! Configuration values come from environment variables and a `.env` file.
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (for endpoints and server settings)
//!
//! Credentials have no default; their getters return an error naming the
//! missing variable.

use std::{env, path::PathBuf};

use crate::Res;

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_AUTH_SCOPE: &str =
    "playlist-read-private playlist-read-collaborative";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_LYRICS_API_URL: &str = "https://lrclib.net/api";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `playsort` directory if it doesn't exist and loads
/// `playsort/.env` from the platform-specific local data directory:
/// - Linux: `~/.local/share/playsort/.env`
/// - macOS: `~/Library/Application Support/playsort/.env`
/// - Windows: `%LOCALAPPDATA%/playsort/.env`
///
/// Variables already present in the process environment are not overridden.
/// A missing `.env` file is not an error, since every required value may
/// come from the environment instead.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

/// Root of everything playsort keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playsort");
    path
}

fn required(name: &str) -> Res<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name).into()),
    }
}

fn with_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the local HTTP server binds to, `SERVER_ADDRESS`.
///
/// Used both for the OAuth callback during `playsort auth` and for
/// `playsort serve`.
pub fn server_addr() -> String {
    with_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Spotify application client ID, `SPOTIFY_API_AUTH_CLIENT_ID`.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Spotify application client secret, `SPOTIFY_API_AUTH_CLIENT_SECRET`.
///
/// Only needed for the client-credentials grant used to read public
/// playlists without a user login. Never log this value.
pub fn spotify_client_secret() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// OAuth redirect URI, `SPOTIFY_API_REDIRECT_URI`.
///
/// Must match the redirect URI registered for the Spotify application and
/// point at `/callback` on [`server_addr`].
pub fn spotify_redirect_uri() -> Res<String> {
    required("SPOTIFY_API_REDIRECT_URI")
}

pub fn spotify_scope() -> String {
    with_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_API_AUTH_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    with_default("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_API_AUTH_URL)
}

pub fn spotify_apiurl() -> String {
    with_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    with_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}

/// Base URL of the LRCLIB-compatible lyrics API, `LYRICS_API_URL`.
pub fn lyrics_apiurl() -> String {
    with_default("LYRICS_API_URL", DEFAULT_LYRICS_API_URL)
}

/// Directory exports are written to, `EXPORT_DIR` (default: working directory).
pub fn export_dir() -> PathBuf {
    PathBuf::from(with_default("EXPORT_DIR", "."))
}
