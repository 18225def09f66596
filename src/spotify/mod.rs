//! # Spotify Integration Module
//!
//! Thin client for the two Spotify services the downloader needs.
//!
//! ```text
//! CLI (download, list)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials grant)
//!     └── Images (catalog lookups, image download)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! [`auth`] exchanges the client id and secret for an app access token using
//! the OAuth 2.0 client credentials grant. No user authorization is involved,
//! so only public catalog data can be read: private playlists come back as
//! [`crate::Error::ResourceUnavailable`].
//!
//! ## Images
//!
//! [`images`] looks up the referenced album, artist, playlist, track or user
//! and returns its `images` list. Tracks carry no images of their own; the
//! images of the album the track belongs to are used instead.
//!
//! ## Error Handling
//!
//! Requests are never retried. A rejected token request or a `401` from the
//! Web API maps to [`crate::Error::Auth`], any other unsuccessful lookup to
//! [`crate::Error::ResourceUnavailable`], and transport failures to
//! [`crate::Error::Http`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials token
//! - `GET /albums/{id}`
//! - `GET /artists/{id}`
//! - `GET /playlists/{id}?fields=images`
//! - `GET /tracks/{id}`
//! - `GET /users/{id}`

pub mod auth;
pub mod images;
