use tabled::Table;

use crate::{
    Res, info,
    types::{ImageDescriptor, ImageTableRow},
    utils, warning,
};

use super::{DownloadOptions, download::fetch};

/// Prints every image rendition of a resource, best first, without downloading.
///
/// Returns the ranked renditions. Credentials are used but never persisted
/// from this command.
pub async fn list_images(options: DownloadOptions) -> Res<Vec<ImageDescriptor>> {
    let fetched = fetch(&options).await?;
    let ranked = utils::rank_images(fetched.images);

    if ranked.is_empty() {
        warning!("{} has no images", fetched.reference);
        return Ok(ranked);
    }

    info!("{} image(s) for {}", ranked.len(), fetched.reference);
    let table_rows: Vec<ImageTableRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, image)| ImageTableRow::new(i + 1, image))
        .collect();
    println!("{}", Table::new(table_rows));

    Ok(ranked)
}
