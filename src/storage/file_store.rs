// src/storage/file_store.rs
//
// File-backed storage gateway
//
// One file per key under the application data directory. All I/O is
// synchronous; a read-modify-write cycle higher up is not atomic across
// processes, and the last writer wins.

use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::storage::gateway::StorageGateway;

/// Get the default storage directory
///
/// Data is stored in the application data directory.
/// Path structure: {APP_DATA}/tenxhub/
pub fn get_storage_dir() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let tenxhub_dir = app_data_dir.join("tenxhub");

    // Ensure directory exists
    fs::create_dir_all(&tenxhub_dir).map_err(AppError::Io)?;

    Ok(tenxhub_dir)
}

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open a gateway rooted at the default application data directory.
    pub fn open_default() -> AppResult<Self> {
        Ok(Self {
            root: get_storage_dir()?,
        })
    }

    /// Open a gateway rooted at an explicit directory (created if missing).
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(AppError::Io)?;
        Ok(Self { root })
    }

    /// Keys double as file names, so they are restricted to a safe charset.
    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::Storage(format!(
                "Invalid storage key: '{key}'"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageGateway for FileStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(AppError::Io)?;
        debug!("wrote {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}
