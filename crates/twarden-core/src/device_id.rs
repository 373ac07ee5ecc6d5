//! Stable per-install device identifier
//!
//! The id is generated once and persisted under the SDK data directory, so
//! analytics and dev-support output can correlate sessions from the same
//! machine without touching any hardware identifiers.

use std::path::{Path, PathBuf};

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::{Error, Result};

const DEVICE_ID_FILENAME: &str = "device_id";
const DEVICE_ID_LEN: usize = 22;

/// Load the persisted device id, generating and storing one on first use.
pub fn device_id() -> Result<String> {
    device_id_in(&data_dir()?)
}

/// Same as [`device_id`], rooted at an explicit directory (used by tests and
/// hosts that relocate SDK state).
pub fn device_id_in(dir: &Path) -> Result<String> {
    let path = dir.join(DEVICE_ID_FILENAME);

    if let Ok(existing) = std::fs::read_to_string(&path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let id = generate_id();
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::device_identity(format!("create {}: {}", dir.display(), e)))?;
    std::fs::write(&path, &id)
        .map_err(|e| Error::device_identity(format!("write {}: {}", path.display(), e)))?;
    Ok(id)
}

/// SDK data directory (`~/.local/share/terminal-warden` on Linux)
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| Error::device_identity("no data directory available"))?;
    Ok(base.join("terminal-warden"))
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DEVICE_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_device_id_is_generated_and_persisted() {
        let dir = TempDir::new().unwrap();

        let first = device_id_in(dir.path()).unwrap();
        assert_eq!(first.len(), DEVICE_ID_LEN);

        // Second read returns the stored id, not a new one
        let second = device_id_in(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_device_id_survives_surrounding_whitespace() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEVICE_ID_FILENAME), "  abc123  \n").unwrap();

        assert_eq!(device_id_in(dir.path()).unwrap(), "abc123");
    }

    #[test]
    fn test_empty_file_regenerates() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEVICE_ID_FILENAME), "").unwrap();

        let id = device_id_in(dir.path()).unwrap();
        assert_eq!(id.len(), DEVICE_ID_LEN);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }
}
