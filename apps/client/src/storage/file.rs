//! File-backed slot store — one file per slot under the platform data dir.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use super::SlotStore;

/// Directory name under the platform data dir, e.g.
/// `~/.local/share/prepnova` on Linux.
const APP_DIR: &str = "prepnova";

/// Stores each slot as `<dir>/<slot>.json`.
///
/// The directory is created lazily on the first save, so constructing the
/// store on a read-only system still works for loads.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Creates a store rooted at the platform data dir, or at `override_dir`
    /// when the configuration provides one.
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        let dir = override_dir.unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        });
        Self { dir }
    }

    /// Creates a store rooted at an explicit directory. Used by tests.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn write_slot(&self, path: &Path, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating slot directory {}", self.dir.display()))?;
        fs::write(path, value).with_context(|| format!("writing slot {}", path.display()))
    }
}

impl SlotStore for FileSlotStore {
    fn load(&self, slot: &str) -> Option<String> {
        let path = self.slot_path(slot);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("slot '{slot}' unreadable ({e}); treating as absent");
                None
            }
        }
    }

    fn save(&self, slot: &str, value: &str) {
        let path = self.slot_path(slot);
        if let Err(e) = self.write_slot(&path, value) {
            warn!("slot '{slot}' write failed ({e:#}); change kept in memory only");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_slot_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSlotStore::at(tmp.path());
        assert_eq!(store.load("prepnova_user"), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSlotStore::at(tmp.path());
        store.save("prepnova_auth", "true");
        assert_eq!(store.load("prepnova_auth"), Some("true".to_string()));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("deep").join("data");
        let store = FileSlotStore::at(&nested);
        store.save("prepnova_user", "{}");
        assert_eq!(store.load("prepnova_user"), Some("{}".to_string()));
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileSlotStore::at(tmp.path());
        store.save("prepnova_auth", "true");
        store.save("prepnova_auth", "false");
        assert_eq!(store.load("prepnova_auth"), Some("false".to_string()));
    }
}
