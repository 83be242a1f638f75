//! Pluggable persistence slot for the exhibition collection.

use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(#[source] io::Error),

    #[error("storage write failed: {0}")]
    Write(#[source] io::Error),
}

/// A single named slot holding the serialized exhibition collection.
///
/// Implementations replace the full payload on every save; there is no
/// partial-update protocol.
pub trait StorageBackend: Send + Sync {
    /// Load the stored payload, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored payload.
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON document on disk.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(e)),
        }
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }
        std::fs::write(&self.path, payload).map_err(StorageError::Write)
    }
}

/// In-memory slot for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStorage {
    payload: RwLock<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload.read().clone())
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        *self.payload.write() = Some(payload.to_string());
        Ok(())
    }
}
