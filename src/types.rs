use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Album,
    Artist,
    Playlist,
    Track,
    User,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Album,
        ResourceType::Artist,
        ResourceType::Playlist,
        ResourceType::Track,
        ResourceType::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Album => "album",
            ResourceType::Artist => "artist",
            ResourceType::Playlist => "playlist",
            ResourceType::Track => "track",
            ResourceType::User => "user",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidFormat(s.to_string()))
    }
}

/// A catalog entity addressed by its type and Spotify id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub resource_type: ResourceType,
    pub id: String,
}

impl ResourceReference {
    pub fn new(resource_type: ResourceType, id: impl Into<String>) -> Self {
        Self {
            resource_type,
            id: id.into(),
        }
    }

    pub fn uri(&self) -> String {
        format!("spotify:{}:{}", self.resource_type, self.id)
    }

    pub fn url(&self) -> String {
        format!("https://open.spotify.com/{}/{}", self.resource_type, self.id)
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Any catalog object that carries an `images` list (album, artist, playlist, user).
///
/// Playlists without a cover send `"images": null`, which decodes as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageDescriptor>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ImageDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ImageDescriptor>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackResponse {
    pub album: ImagesResponse,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

#[derive(Tabled)]
pub struct ImageTableRow {
    pub rank: usize,
    pub width: String,
    pub height: String,
    pub url: String,
}

impl ImageTableRow {
    pub fn new(rank: usize, image: &ImageDescriptor) -> Self {
        let dimension = |d: Option<u32>| d.map_or_else(|| "-".to_string(), |v| v.to_string());
        Self {
            rank,
            width: dimension(image.width),
            height: dimension(image.height),
            url: image.url.clone(),
        }
    }
}
