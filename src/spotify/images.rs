use reqwest::{Client, StatusCode};

use crate::{
    config::Endpoints,
    error::Error,
    types::{
        AccessToken, ImageDescriptor, ImagesResponse, ResourceReference, ResourceType,
        TrackResponse,
    },
    utils,
};

/// Retrieves the images Spotify lists for a resource.
///
/// Looks up the referenced object through the Web API and returns its
/// `images` array in the order Spotify sends it. For tracks the images of the
/// track's album are returned.
///
/// # Arguments
///
/// * `endpoints` - Web API location
/// * `token` - App access token from [`crate::spotify::auth::request_token`]
/// * `reference` - The resource to look up
///
/// # Errors
///
/// - `Error::Auth` - The Web API answered `401 Unauthorized`
/// - `Error::ResourceUnavailable` - Any other unsuccessful status, e.g. a
///   private playlist or an unknown id
/// - `Error::Http` - Network failure or undecodable response
///
/// # Example
///
/// ```
/// let reference = utils::resolve("spotify:track:abc")?;
/// let images = get_images(&endpoints, &token, &reference).await?;
/// ```
pub async fn get_images(
    endpoints: &Endpoints,
    token: &AccessToken,
    reference: &ResourceReference,
) -> Result<Vec<ImageDescriptor>, Error> {
    let pb = utils::spinner("Fetching resource images...");
    let result = fetch_images(endpoints, token, reference).await;
    pb.finish_and_clear();
    result
}

async fn fetch_images(
    endpoints: &Endpoints,
    token: &AccessToken,
    reference: &ResourceReference,
) -> Result<Vec<ImageDescriptor>, Error> {
    let api_url = lookup_url(endpoints, reference);
    log::debug!("looking up {} at {}", reference, api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(&token.access_token)
        .send()
        .await?;

    let response = match response.status() {
        status if status.is_success() => response,
        StatusCode::UNAUTHORIZED => {
            return Err(Error::Auth(format!(
                "the Web API rejected the access token for {reference}"
            )));
        }
        status => {
            return Err(Error::ResourceUnavailable {
                reference: reference.clone(),
                status,
            });
        }
    };

    let images = match reference.resource_type {
        ResourceType::Track => response.json::<TrackResponse>().await?.album.images,
        _ => response.json::<ImagesResponse>().await?.images,
    };
    log::debug!("{} lists {} image(s)", reference, images.len());

    Ok(images)
}

fn lookup_url(endpoints: &Endpoints, reference: &ResourceReference) -> String {
    let api = endpoints.api_url.trim_end_matches('/');
    let id = &reference.id;
    match reference.resource_type {
        ResourceType::Album => format!("{api}/albums/{id}"),
        ResourceType::Artist => format!("{api}/artists/{id}"),
        ResourceType::Playlist => format!("{api}/playlists/{id}?fields=images"),
        ResourceType::Track => format!("{api}/tracks/{id}"),
        ResourceType::User => format!("{api}/users/{id}"),
    }
}

/// Downloads the raw bytes of an image rendition.
///
/// Image URLs point at Spotify's CDN and need no authorization.
pub async fn download(image: &ImageDescriptor) -> Result<Vec<u8>, Error> {
    let pb = utils::spinner("Downloading image...");
    let result = fetch_bytes(&image.url).await;
    pb.finish_and_clear();
    result
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, Error> {
    log::debug!("downloading {}", url);
    let client = Client::new();
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
