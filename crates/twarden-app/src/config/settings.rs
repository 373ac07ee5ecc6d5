//! Settings parser for .twarden/settings.toml

use std::path::Path;

use twarden_core::prelude::*;

use super::boot::TWARDEN_DIR;
use super::types::ShellSettings;

pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Load shell settings, falling back to defaults when the file is missing
/// or unparseable. Settings are tunables, not credentials, so a bad file
/// degrades gracefully.
pub fn load_settings(project_path: &Path) -> ShellSettings {
    let settings_path = project_path.join(TWARDEN_DIR).join(SETTINGS_FILENAME);

    if !settings_path.exists() {
        debug!("No settings file at {:?}, using defaults", settings_path);
        return ShellSettings::default();
    }

    match std::fs::read_to_string(&settings_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", settings_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", settings_path, e);
                ShellSettings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", settings_path, e);
            ShellSettings::default()
        }
    }
}
