use reqwest::StatusCode;
use thiserror::Error;

use crate::{management::CredentialError, types::ResourceReference};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The provided input \"{0}\" does not resolve to a valid Spotify resource.")]
    InvalidFormat(String),

    #[error("Authentication with Spotify failed: {0}")]
    Auth(String),

    #[error(
        "The resource at URL / URI: \"{reference}\" could not be retrieved ({status}). If the resource is a playlist, it must be public before its data can be retrieved."
    )]
    ResourceUnavailable {
        reference: ResourceReference,
        status: StatusCode,
    },

    #[error("The resource has no images.")]
    EmptySet,

    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
