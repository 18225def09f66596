use std::{cmp::Reverse, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::Error,
    types::{ImageDescriptor, ResourceReference, ResourceType},
};

const URL_HOST_MARKER: &str = "spotify.com/";
const URI_SCHEME: &str = "spotify:";

/// Parses a Spotify URL or URI into the referenced resource.
///
/// Anything containing a `/` is treated as a URL and must contain
/// `spotify.com/`, followed by `<type>/<id>` with an optional query string.
/// Otherwise anything containing a `:` is treated as a URI of the exact form
/// `spotify:<type>:<id>`.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] carrying the input when it matches neither
/// shape, names an unknown resource type or has an empty id.
///
/// # Example
///
/// ```
/// let reference = resolve("https://open.spotify.com/album/123?si=x")?;
/// assert_eq!(reference.resource_type, ResourceType::Album);
/// assert_eq!(reference.id, "123");
/// ```
pub fn resolve(input: &str) -> Result<ResourceReference, Error> {
    let invalid = || Error::InvalidFormat(input.to_string());

    let (resource_type, id) = if input.contains('/') {
        let (_, path) = input.split_once(URL_HOST_MARKER).ok_or_else(invalid)?;
        let (resource_type, rest) = path.split_once('/').ok_or_else(invalid)?;
        let id = rest.split_once('?').map_or(rest, |(id, _)| id);
        (resource_type, id)
    } else if input.contains(':') {
        if !input.starts_with(URI_SCHEME) {
            return Err(invalid());
        }
        match input.split(':').collect::<Vec<_>>().as_slice() {
            [_, resource_type, id] => (*resource_type, *id),
            _ => return Err(invalid()),
        }
    } else {
        return Err(invalid());
    };

    if id.is_empty() || id.contains('/') {
        return Err(invalid());
    }

    let resource_type: ResourceType = resource_type.parse().map_err(|_| invalid())?;
    Ok(ResourceReference::new(resource_type, id))
}

/// Sort key for an image rendition.
///
/// Only the width is considered; a rendition without a width ranks as 0 even
/// when it has a height.
pub fn ranking_key(image: &ImageDescriptor) -> u32 {
    image.width.unwrap_or(0)
}

/// Orders renditions from largest to smallest, keeping the catalog order for ties.
pub fn rank_images(mut images: Vec<ImageDescriptor>) -> Vec<ImageDescriptor> {
    images.sort_by_key(|image| Reverse(ranking_key(image)));
    images
}

pub fn select_best(images: &[ImageDescriptor]) -> Result<ImageDescriptor, Error> {
    rank_images(images.to_vec())
        .into_iter()
        .next()
        .ok_or(Error::EmptySet)
}

/// File name used when no output path is given: the last URL segment plus `.jpg`.
pub fn default_file_name(image_url: &str) -> String {
    let path = image_url
        .split_once(['?', '#'])
        .map_or(image_url, |(path, _)| path);
    let segment = path
        .split('/')
        .rfind(|segment| !segment.is_empty())
        .unwrap_or("image");
    format!("{segment}.jpg")
}

pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
