use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use eyre::Result;

use super::StorageSlot;
use crate::config::APP_CONFIG;

/// Durable slot backed by one file per key under the storage directory.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        FileSlot {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn from_config(key: &str) -> Self {
        Self::new(&APP_CONFIG.notify_storage_dir, key)
    }
}

impl StorageSlot for FileSlot {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a torn write cannot leave a half-written slot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_none_for_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "notifications");
        assert_eq!(slot.load().unwrap(), None);
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), "notifications");
        slot.store("[]").unwrap();
        assert_eq!(slot.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested/state"), "notifications");
        slot.store("[]").unwrap();
        assert_eq!(slot.load().unwrap().as_deref(), Some("[]"));
    }
}
