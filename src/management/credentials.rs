use std::{
    env,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::types::Credentials;

pub const CLIENT_ID_KEY: &str = "SPOTIPY_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "SPOTIPY_CLIENT_SECRET";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("cannot access credential file: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "credential file {} is malformed: {source}. Run with --clear to reset it.",
        .path.display()
    )]
    Malformed {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },

    #[error(
        "{0} is not configured. Pass --client-id and --client-secret (only required on first run)."
    )]
    Missing(&'static str),
}

/// Client id and secret as stored in the credential file.
///
/// The file holds two `KEY = value` lines. Values that are absent or empty
/// are treated the same way.
pub struct CredentialManager {
    path: PathBuf,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl CredentialManager {
    pub fn new(path: PathBuf) -> Self {
        CredentialManager {
            path,
            client_id: None,
            client_secret: None,
        }
    }

    /// Loads the credential file at `path`. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self, CredentialError> {
        let mut manager = Self::new(path.to_path_buf());
        if !path.is_file() {
            log::debug!("no credential file at {}", path.display());
            return Ok(manager);
        }

        let malformed = |source| CredentialError::Malformed {
            path: path.to_path_buf(),
            source,
        };

        for entry in dotenv::from_path_iter(path).map_err(malformed)? {
            let (key, value) = entry.map_err(malformed)?;
            let value = non_empty(Some(value));
            match key.as_str() {
                CLIENT_ID_KEY => manager.client_id = value,
                CLIENT_SECRET_KEY => manager.client_secret = value,
                other => log::warn!("ignoring unknown key {} in {}", other, path.display()),
            }
        }

        Ok(manager)
    }

    /// Lets `SPOTIPY_CLIENT_ID` / `SPOTIPY_CLIENT_SECRET` from the process
    /// environment take precedence over the stored values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Overrides stored values with whatever `lookup` returns for
    /// [`CLIENT_ID_KEY`] and [`CLIENT_SECRET_KEY`]. Empty results are skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(client_id) = non_empty(lookup(CLIENT_ID_KEY)) {
            self.client_id = Some(client_id);
        }
        if let Some(client_secret) = non_empty(lookup(CLIENT_SECRET_KEY)) {
            self.client_secret = Some(client_secret);
        }
    }

    /// Applies values passed on the command line.
    ///
    /// Returns `true` when at least one value was supplied, i.e. the
    /// configuration is new and may be persisted afterwards.
    pub fn update(&mut self, client_id: Option<String>, client_secret: Option<String>) -> bool {
        let is_new = client_id.is_some() || client_secret.is_some();
        if let Some(client_id) = client_id {
            self.client_id = Some(client_id);
        }
        if let Some(client_secret) = client_secret {
            self.client_secret = Some(client_secret);
        }
        is_new
    }

    pub fn credentials(&self) -> Result<Credentials, CredentialError> {
        let client_id = self
            .client_id
            .clone()
            .ok_or(CredentialError::Missing(CLIENT_ID_KEY))?;
        let client_secret = self
            .client_secret
            .clone()
            .ok_or(CredentialError::Missing(CLIENT_SECRET_KEY))?;

        Ok(Credentials {
            client_id,
            client_secret,
        })
    }

    pub async fn persist(&self) -> Result<(), CredentialError> {
        write_file(
            &self.path,
            self.client_id.as_deref().unwrap_or_default(),
            self.client_secret.as_deref().unwrap_or_default(),
        )
        .await
    }

    /// Resets the credential file at `path` to empty values.
    pub async fn clear(path: &Path) -> Result<(), CredentialError> {
        write_file(path, "", "").await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn write_file(
    path: &Path,
    client_id: &str,
    client_secret: &str,
) -> Result<(), CredentialError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let contents =
        format!("{CLIENT_ID_KEY} = {client_id}\n{CLIENT_SECRET_KEY} = {client_secret}\n");
    async_fs::write(path, contents).await?;
    log::debug!("wrote credential file {}", path.display());
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
