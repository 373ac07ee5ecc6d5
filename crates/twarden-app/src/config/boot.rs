//! Boot config loading for .twarden/bootconfig.toml

use std::path::{Path, PathBuf};

use twarden_core::prelude::*;

use super::types::BootConfig;

pub const BOOT_CONFIG_FILENAME: &str = "bootconfig.toml";
pub const TWARDEN_DIR: &str = ".twarden";

/// Environment variable overriding the boot config location
pub const BOOT_CONFIG_ENV: &str = "TWARDEN_BOOT_CONFIG";

/// Where a loaded boot config came from, for dev support info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootConfigSource {
    /// Explicit path (CLI flag or `TWARDEN_BOOT_CONFIG`)
    Path(PathBuf),
    /// `.twarden/bootconfig.toml` under the working directory
    ProjectDir(PathBuf),
    /// No file found; built-in defaults
    Defaults,
}

impl BootConfigSource {
    pub fn label(&self) -> String {
        match self {
            BootConfigSource::Path(path) => path.display().to_string(),
            BootConfigSource::ProjectDir(path) => path.display().to_string(),
            BootConfigSource::Defaults => "built-in defaults".to_string(),
        }
    }
}

/// Load the boot config for a project directory.
///
/// Resolution order:
/// 1. `explicit` path (missing file is an error)
/// 2. `TWARDEN_BOOT_CONFIG` (missing file is an error)
/// 3. `<project>/.twarden/bootconfig.toml` (missing file falls back to defaults)
///
/// Parse failures are always errors. Credentials should never silently
/// degrade to defaults.
pub fn load_boot_config(
    project_path: &Path,
    explicit: Option<&Path>,
) -> Result<(BootConfig, BootConfigSource)> {
    if let Some(path) = explicit {
        let config = read_boot_config(path, true)?;
        return Ok((config, BootConfigSource::Path(path.to_path_buf())));
    }

    if let Ok(env_path) = std::env::var(BOOT_CONFIG_ENV) {
        let path = PathBuf::from(env_path);
        let config = read_boot_config(&path, true)?;
        return Ok((config, BootConfigSource::Path(path)));
    }

    let project_config = project_path.join(TWARDEN_DIR).join(BOOT_CONFIG_FILENAME);
    if project_config.exists() {
        let config = read_boot_config(&project_config, false)?;
        return Ok((config, BootConfigSource::ProjectDir(project_config)));
    }

    debug!("No boot config at {:?}, using defaults", project_config);
    Ok((BootConfig::default(), BootConfigSource::Defaults))
}

fn read_boot_config(path: &Path, required: bool) -> Result<BootConfig> {
    if required && !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

    let config: BootConfig = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))?;

    debug!("Loaded boot config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let twarden_dir = dir.join(TWARDEN_DIR);
        std::fs::create_dir_all(&twarden_dir).unwrap();
        let path = twarden_dir.join(BOOT_CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_missing_project_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();

        let (config, source) = load_boot_config(dir.path(), None).unwrap();

        assert!(config.should_authenticate);
        assert_eq!(source, BootConfigSource::Defaults);
    }

    #[test]
    #[serial]
    fn test_loads_project_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "consumer_key = \"key123\"\n");

        let (config, source) = load_boot_config(dir.path(), None).unwrap();

        assert_eq!(config.consumer_key, "key123");
        assert_eq!(source, BootConfigSource::ProjectDir(path));
    }

    #[test]
    #[serial]
    fn test_explicit_path_missing_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_boot_config(dir.path(), Some(&missing)).unwrap_err();

        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    #[serial]
    fn test_parse_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "should_authenticate = \"not a bool\"\n");

        let err = load_boot_config(dir.path(), None).unwrap_err();

        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    #[serial]
    fn test_env_override_wins_over_project_dir() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "consumer_key = \"project\"\n");

        let env_config = dir.path().join("custom.toml");
        std::fs::write(&env_config, "consumer_key = \"env\"\n").unwrap();
        std::env::set_var(BOOT_CONFIG_ENV, &env_config);

        let result = load_boot_config(dir.path(), None);
        std::env::remove_var(BOOT_CONFIG_ENV);

        let (config, source) = result.unwrap();
        assert_eq!(config.consumer_key, "env");
        assert_eq!(source, BootConfigSource::Path(env_config));
    }
}
