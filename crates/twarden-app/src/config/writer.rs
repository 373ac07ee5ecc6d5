//! Configuration writer for .twarden/settings.toml

use std::path::Path;

use fs2::FileExt;
use twarden_core::prelude::*;

use super::boot::TWARDEN_DIR;
use super::settings::SETTINGS_FILENAME;
use super::types::ShellSettings;

/// Write shell settings back to .twarden/settings.toml.
///
/// The file is held under an exclusive lock for the duration of the write
/// so concurrent shells do not interleave their output.
pub fn save_settings(project_path: &Path, settings: &ShellSettings) -> Result<()> {
    let twarden_dir = project_path.join(TWARDEN_DIR);
    std::fs::create_dir_all(&twarden_dir)
        .map_err(|e| Error::config(format!("Failed to create .twarden dir: {}", e)))?;

    let settings_path = twarden_dir.join(SETTINGS_FILENAME);
    let body = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let content = format!("# Terminal Warden Shell Settings\n\n{}", body);

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&settings_path)
        .map_err(|e| Error::config(format!("Failed to open settings.toml: {}", e)))?;

    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock settings.toml: {}", e)))?;

    use std::io::Write;
    let mut file = file;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write settings.toml: {}", e)))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush settings.toml: {}", e)))?;

    // Lock is released when file is dropped
    info!("Saved shell settings to {:?}", settings_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::load_settings;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();

        let mut settings = ShellSettings::default();
        settings.snapshot.branded = true;
        settings.loading.rotation_ms = 750;
        settings.dev.enabled = Some(false);

        save_settings(dir.path(), &settings).unwrap();
        let reloaded = load_settings(dir.path());

        assert!(reloaded.snapshot.branded);
        assert_eq!(reloaded.loading.rotation_ms, 750);
        assert_eq!(reloaded.dev.enabled, Some(false));
    }

    #[test]
    fn test_save_writes_header_comment() {
        let dir = TempDir::new().unwrap();

        save_settings(dir.path(), &ShellSettings::default()).unwrap();

        let content = std::fs::read_to_string(
            dir.path().join(TWARDEN_DIR).join(SETTINGS_FILENAME),
        )
        .unwrap();
        assert!(content.starts_with("# Terminal Warden Shell Settings"));
        assert!(content.contains("[snapshot]"));
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper");

        save_settings(&nested, &ShellSettings::default()).unwrap();

        assert!(nested.join(TWARDEN_DIR).join(SETTINGS_FILENAME).exists());
    }
}
