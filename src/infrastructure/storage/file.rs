use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::domain::{Storage, StoragePtr};

/// File-backed storage: the whole key/value map is one JSON object on disk,
/// rewritten on every mutation. Suited to the small data sets the stores
/// hold; there is no incremental write path.
pub fn create_file_storage(path: impl AsRef<Path>) -> Result<StoragePtr> {
    // ---
    Ok(std::sync::Arc::new(FileStorage::open(path)?))
}

pub struct FileStorage {
    // ---
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens (or creates) the backing file. An existing file must hold a
    /// JSON object of string values; anything else fails here rather than
    /// surfacing later as per-key corruption.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        // ---
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read storage file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("storage file {} is not valid JSON", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        // ---
        let json = serde_json::to_string(entries)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write storage file {}", self.path.display()))
    }
}

impl Storage for FileStorage {
    // ---
    fn get(&self, key: &str) -> Result<Option<String>> {
        // ---
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // ---
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        // ---
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}
