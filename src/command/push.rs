use anyhow::Result;
use std::path::Path;

use crate::api::{PublishClient, PublishError};
use crate::notify::{notify, Notifier};
use crate::settings::{Settings, SettingsStore};
use crate::vault::{FileRef, FsVault, Vault};

pub const SYNCED_MESSAGE: &str = "File has been synced";
pub const FAILURE_PREFIX: &str = "Negative API response: ";

/// Push one file and report the outcome through the notifier.
///
/// The API key is sent as the bearer token unchanged.
pub async fn sync_file<V: Vault, N: Notifier>(
    client: &PublishClient,
    vault: &V,
    notifier: &N,
    settings: &Settings,
    file: Option<&FileRef>,
) -> Result<FileRef, PublishError> {
    let result = client
        .publish_file(vault, &settings.url, &settings.api_key, file)
        .await;

    match &result {
        Ok(_) => notify(notifier, None, SYNCED_MESSAGE),
        Err(e) => notify(notifier, Some(e), &format!("{}{}", FAILURE_PREFIX, e)),
    }

    result
}

/// Returns whether the file was published.
pub async fn run_push<N: Notifier>(
    file: &Path,
    settings_dir: Option<String>,
    notifier: &N,
) -> Result<bool> {
    let store = SettingsStore::open(settings_dir)?;
    let file = FileRef::resolve(file)?;
    let client = PublishClient::new()?;

    let result = sync_file(&client, &FsVault, notifier, store.settings(), file.as_ref()).await;

    Ok(result.is_ok())
}
