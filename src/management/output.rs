use std::path::{Path, PathBuf};

use crate::utils;

/// Works out where the downloaded image goes.
///
/// An explicit output path is taken relative to `working_dir` unless it is
/// already absolute. Without one the file is named after the last segment of
/// the image URL and placed in `working_dir`.
pub fn resolve_output_path(output: Option<&Path>, image_url: &str, working_dir: &Path) -> PathBuf {
    match output {
        Some(path) => working_dir.join(path),
        None => working_dir.join(utils::default_file_name(image_url)),
    }
}

/// Writes `bytes` to `path`, creating missing parent directories first.
pub async fn write_image(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            async_fs::create_dir_all(parent).await?;
        }
    }

    async_fs::write(path, bytes).await?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
