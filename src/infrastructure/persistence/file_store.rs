//! File-backed durable store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::store::{DurableStore, StoreError};

/// Stores each key as a file of the same name inside one directory.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// a crash mid-write leaves either the old or the new value, never a torn one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the store directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::write(&dir.display().to_string(), e))?;
        info!(dir = %dir.display(), "File store ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl DurableStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "Key not present in file store");
                Ok(None)
            }
            Err(e) => Err(StoreError::read(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let target = self.path_for(key);
        let temp = self.dir.join(format!(".{key}.tmp"));

        let mut file = fs::File::create(&temp).map_err(|e| StoreError::write(key, e))?;
        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::write(key, e))?;
        drop(file);

        fs::rename(&temp, &target).map_err(|e| StoreError::write(key, e))?;
        debug!(key, bytes = value.len(), "Key written to file store");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
