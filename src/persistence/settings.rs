use crate::domain::PresetDurations;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub presets: PresetDurations,
    pub base_url: String,       // Where the login and user-management pages live
    pub token_key: String,      // Storage key of the session token
    pub desktop_notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            presets: PresetDurations::default(),
            base_url: String::from("http://localhost:3000"),
            token_key: String::from("token"),
            desktop_notifications: true,
        }
    }
}

/// Load settings from config.json, defaults if the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<AppSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let settings: AppSettings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(settings)
}

/// Save settings to config.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &AppSettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
