use super::backend::PreferenceBackend;
use crate::error::{FolioError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PREFERENCES_FILE: &str = "preferences.json";

/// Filesystem-backed preferences: one JSON object per storage directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Backend rooted at the platform data directory, if one can be determined.
    pub fn from_platform_dirs() -> Option<Self> {
        directories::ProjectDirs::from("dev", "folio", "folio")
            .map(|dirs| Self::new(dirs.data_dir().to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FolioError::Io)?;
        }
        Ok(())
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>> {
        let path = self.preferences_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(FolioError::Io)?;
        let map = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(map)
    }

    fn save_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(map).map_err(FolioError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".preferences-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(FolioError::Io)?;
        fs::rename(&tmp_file, self.preferences_path()).map_err(FolioError::Io)?;
        Ok(())
    }
}

impl PreferenceBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_map()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut map = match self.load_map() {
            Ok(map) => map,
            Err(FolioError::Serialization(e)) => {
                log::warn!(
                    "event=preferences_reset module=store reason=corrupt error={}",
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.load_map()?;
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}
