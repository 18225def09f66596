use std::path::PathBuf;

use crate::{
    Res,
    config::Endpoints,
    info,
    management::{self, CredentialError, CredentialManager},
    spotify,
    types::{ImageDescriptor, ResourceReference},
    utils, warning,
};

/// Everything a single run needs, with all paths absolute.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Resource URL or URI as typed by the user
    pub id: String,
    /// Destination file; derived from the image URL when absent
    pub output: Option<PathBuf>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Use the given credentials without saving them
    pub one_time: bool,
    pub config_path: PathBuf,
    /// Directory relative outputs are resolved against
    pub working_dir: PathBuf,
    pub endpoints: Endpoints,
}

pub(super) struct FetchedImages {
    pub reference: ResourceReference,
    pub images: Vec<ImageDescriptor>,
    pub credentials: CredentialManager,
    pub is_new_config: bool,
}

/// Downloads the largest image of a resource and returns where it was saved.
///
/// Credentials passed in `options` are written back to the credential file
/// only after the image was saved, and never when `one_time` is set. Nothing
/// is written at all when authentication or the lookup fails.
pub async fn download(options: DownloadOptions) -> Res<PathBuf> {
    let fetched = fetch(&options).await?;
    let best = utils::select_best(&fetched.images)?;

    let path = management::resolve_output_path(
        options.output.as_deref(),
        &best.url,
        &options.working_dir,
    );
    info!(
        "Saving {}x{} image of {}",
        dimension(best.width),
        dimension(best.height),
        fetched.reference
    );

    let bytes = spotify::images::download(&best).await?;
    management::write_image(&path, &bytes).await?;

    if fetched.is_new_config && !options.one_time {
        fetched.credentials.persist().await?;
        info!(
            "Saved credentials to {}",
            fetched.credentials.path().display()
        );
    }

    Ok(path)
}

/// Resolves the identifier, authenticates and returns the resource's images.
pub(super) async fn fetch(options: &DownloadOptions) -> Res<FetchedImages> {
    let reference = utils::resolve(&options.id)?;

    let mut credentials = match CredentialManager::load(&options.config_path) {
        Ok(credentials) => credentials,
        // a complete pair on the command line replaces an unreadable file
        Err(e @ CredentialError::Malformed { .. })
            if options.client_id.is_some() && options.client_secret.is_some() =>
        {
            warning!("{}", e);
            CredentialManager::new(options.config_path.clone())
        }
        Err(e) => return Err(e.into()),
    };
    credentials.apply_env_overrides();
    let is_new_config =
        credentials.update(options.client_id.clone(), options.client_secret.clone());

    let token =
        spotify::auth::request_token(&options.endpoints, &credentials.credentials()?).await?;
    let images = spotify::images::get_images(&options.endpoints, &token, &reference).await?;

    Ok(FetchedImages {
        reference,
        images,
        credentials,
        is_new_config,
    })
}

fn dimension(value: Option<u32>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}
