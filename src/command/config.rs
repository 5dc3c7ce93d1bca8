use anyhow::Result;

use crate::cli::ConfigAction;
use crate::settings::SettingsStore;

/// Hide all but the last four characters of the API key.
fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    match chars.len() {
        0 => "(not set)".to_string(),
        n if n <= 4 => "*".repeat(n),
        n => {
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}{}", "*".repeat(n - 4), tail)
        }
    }
}

pub async fn run_config(action: ConfigAction, settings_dir: Option<String>) -> Result<()> {
    let mut store = SettingsStore::open(settings_dir)?;

    match action {
        ConfigAction::Show => {
            let settings = store.settings();
            let url = if settings.url.is_empty() {
                "(not set)"
            } else {
                settings.url.as_str()
            };
            println!("Publisher URL: {}", url);
            println!("API Key:       {}", mask_api_key(&settings.api_key));
            println!("Settings file: {}", store.settings_path().display());
        }
        ConfigAction::SetUrl { url } => {
            store.set_url(url)?;
            println!("✅ Publisher URL saved.");
        }
        ConfigAction::SetApiKey { api_key } => {
            store.set_api_key(api_key)?;
            println!("✅ API key saved.");
        }
    }

    Ok(())
}
