use std::path::Path;

use crate::{Res, management::CredentialManager};

pub async fn clear(config_path: &Path) -> Res<()> {
    CredentialManager::clear(config_path).await?;
    Ok(())
}
