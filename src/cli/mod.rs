//! # CLI Module
//!
//! Command implementations behind the `spotify-image-downloader` binary. Each
//! one returns a [`crate::Res`] so the binary can report every failure the
//! same way.
//!
//! - [`download`] - Resolve the identifier, pick the largest image and save it
//! - [`list_images`] - Print the ranked image renditions as a table
//! - [`clear`] - Reset the stored client credentials
//!
//! ## Data Flow
//!
//! ```text
//! identifier ──resolve──▶ ResourceReference
//! credential file + flags + env ──▶ Credentials ──▶ access token
//! access token + reference ──▶ images ──rank──▶ best image ──▶ file
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotify-image-downloader https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy \
//!     --client-id <ID> --client-secret <SECRET>      # first run, saves credentials
//! spotify-image-downloader spotify:artist:0OdUWJ0sBjDrqHygGUXeCF -o covers/artist.jpg
//! spotify-image-downloader spotify:track:6rqhFgbbKwnb9MLmUQDhG6 --list
//! spotify-image-downloader --clear
//! ```

mod clear;
mod download;
mod list;

pub use clear::clear;
pub use download::DownloadOptions;
pub use download::download;
pub use list::list_images;
