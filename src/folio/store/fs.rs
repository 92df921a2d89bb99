use super::KeyValueStorage;
use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value storage: each key is `<root>/<key>.json`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FolioError::Io)?;
        }
        Ok(())
    }
}

// Keys become file names, so anything that could escape the root is refused.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control);
    if bad {
        return Err(FolioError::Storage(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(FolioError::Io)?;
        Ok(Some(value))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        self.ensure_dir()?;

        // Write then rename so readers never see a half-written collection.
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).map_err(FolioError::Io)?;
        fs::rename(&tmp, &path).map_err(FolioError::Io)?;
        tracing::trace!(key, path = %path.display(), bytes = value.len(), "stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(FolioError::Io)?;
        }
        Ok(())
    }
}
