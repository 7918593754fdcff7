use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::{Storage, StoragePtr};

/// In-memory storage backend. State lives for the process lifetime only;
/// the default backend for tests and for running without a storage path.
pub fn create_memory_storage() -> StoragePtr {
    // ---
    std::sync::Arc::new(MemoryStorage::new())
}

pub struct MemoryStorage {
    // ---
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    // ---
    pub fn new() -> Self {
        // ---
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        // ---
        Self::new()
    }
}

impl Storage for MemoryStorage {
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
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        // ---
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        // ---
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("user").unwrap(), None);

        storage.set("user", "{\"id\":\"1\"}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{\"id\":\"1\"}"));

        storage.set("user", "{\"id\":\"2\"}").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("{\"id\":\"2\"}"));

        storage.remove("user").unwrap();
        assert_eq!(storage.get("user").unwrap(), None);

        // Removing an absent key is not an error
        storage.remove("user").unwrap();
    }
}
