// src/storage/memory.rs
//
// In-memory storage gateway. The injectable stand-in for tests and for
// callers that want a scratch store with the same contract as the file
// gateway.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::storage::gateway::StorageGateway;

#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AppError {
        AppError::Storage("storage lock poisoned".to_string())
    }
}

impl StorageGateway for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_contract_as_file_gateway() {
        let storage = MemoryStorage::new();
        assert!(storage.read("weekendRuns").unwrap().is_none());

        storage.write("weekendRuns", "[]").unwrap();
        assert_eq!(storage.read("weekendRuns").unwrap().as_deref(), Some("[]"));

        storage.write("weekendRuns", "[1]").unwrap();
        assert_eq!(storage.read("weekendRuns").unwrap().as_deref(), Some("[1]"));

        storage.remove("weekendRuns").unwrap();
        storage.remove("weekendRuns").unwrap();
        assert!(storage.read("weekendRuns").unwrap().is_none());
    }
}
