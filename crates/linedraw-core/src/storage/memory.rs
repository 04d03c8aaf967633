//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, payload: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<String> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        entries.remove(key);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        Ok(entries.keys().cloned().collect())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        Ok(entries.contains_key(key))
    }
}
