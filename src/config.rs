//! Configuration management for the Spotify Image Downloader.
//!
//! Two things are configurable: where the client credentials are stored and
//! which Spotify endpoints are called. The credential file lives in the
//! platform-specific local data directory unless `--config` points elsewhere;
//! the endpoints default to the public Spotify services and can be redirected
//! through environment variables.

use std::{env, io, path::PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const APP_DIR: &str = "spotify-image-downloader";
const CREDENTIALS_FILE: &str = "config";

/// Returns the default location of the credential file.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotify-image-downloader/config`
/// - macOS: `~/Library/Application Support/spotify-image-downloader/config`
/// - Windows: `%LOCALAPPDATA%/spotify-image-downloader/config`
///
/// Falls back to the current directory when no data directory is known.
pub fn credentials_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(CREDENTIALS_FILE);
    path
}

/// Makes a user-supplied path absolute against the invocation directory.
pub fn absolute_path(path: PathBuf) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(env::current_dir()?.join(path))
}

/// Base URLs of the Spotify services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Web API root, e.g. `https://api.spotify.com/v1`
    pub api_url: String,
    /// OAuth token endpoint, e.g. `https://accounts.spotify.com/api/token`
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Reads `SPOTIFY_API_URL` and `SPOTIFY_API_TOKEN_URL`, keeping the
    /// defaults for unset or empty variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env_or("SPOTIFY_API_URL", defaults.api_url),
            token_url: env_or("SPOTIFY_API_TOKEN_URL", defaults.token_url),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim_end_matches('/').to_string(),
        _ => default,
    }
}
