//! Settings storage for the publisher.
//!
//! Holds the publisher URL and API key and keeps them in `settings.json`
//! inside the config directory (or a custom settings directory).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SETTINGS_FILE: &str = "settings.json";

/// Persisted settings. Missing keys fall back to empty strings; keys this
/// version does not know are carried through unchanged on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub url: String,
    pub api_key: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Settings store
///
/// Owns the in-memory settings and writes them back wholesale on every edit.
pub struct SettingsStore {
    settings_path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Open the store and load whatever was saved before.
    ///
    /// # Arguments
    /// * `settings_dir` - Optional custom directory. Defaults to `<config dir>/filepush`
    pub fn open(settings_dir: Option<String>) -> Result<Self> {
        let base_dir = match settings_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .context("Could not determine config directory")?
                .join("filepush"),
        };

        std::fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create settings directory: {:?}", base_dir))?;

        let mut store = Self {
            settings_path: base_dir.join(SETTINGS_FILE),
            settings: Settings::default(),
        };
        store.load()?;

        Ok(store)
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merge persisted data over the defaults.
    pub fn load(&mut self) -> Result<()> {
        if !self.settings_path.exists() {
            debug!("No settings at {:?}, using defaults", self.settings_path);
            self.settings = Settings::default();
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings file: {:?}", self.settings_path))?;

        self.settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", self.settings_path))?;

        debug!("Settings loaded from {:?}", self.settings_path);
        Ok(())
    }

    /// Write the current settings wholesale.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.settings)
            .context("Failed to serialize settings")?;

        std::fs::write(&self.settings_path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", self.settings_path))?;

        debug!("Settings saved to {:?}", self.settings_path);
        Ok(())
    }

    pub fn set_url(&mut self, url: String) -> Result<()> {
        self.settings.url = url;
        self.save()?;
        info!("Publisher URL updated");
        Ok(())
    }

    pub fn set_api_key(&mut self, api_key: String) -> Result<()> {
        self.settings.api_key = api_key;
        self.save()?;
        info!("API key updated");
        Ok(())
    }
}
