//! Pluggable persistence for the Document blob.
//!
//! A backend stores exactly one opaque blob: the serialized Document under a
//! single key. There is no schema versioning or migration.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use paintstock_core::StoreError;

/// Backend-level failure.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not resolve an application data directory")]
    NoDataDir,
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::storage(err.to_string())
    }
}

/// Blob storage abstraction behind the store.
pub trait StorageBackend: Send + Sync {
    /// Load the persisted blob, if one exists.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the persisted blob in full.
    fn save(&self, blob: &str) -> Result<(), StorageError>;

    /// Discard the persisted blob entirely.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory backend for tests and throwaway stores.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blob: RwLock<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a raw blob, bypassing the store (test hook for corrupt or
    /// hand-crafted state).
    pub fn put_raw(&self, blob: impl Into<String>) {
        *self.blob.write().unwrap() = Some(blob.into());
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.read().unwrap().clone())
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        *self.blob.write().unwrap() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.blob.write().unwrap() = None;
        Ok(())
    }
}

/// File-backed backend holding the Document as one JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the default OS data location:
    /// `{app_data_dir}/paintstock/db.json`.
    pub fn at_default_path() -> Result<Self, StorageError> {
        Ok(Self::new(default_db_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename so a crash mid-write never leaves a torn file.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, blob)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Resolve the default database file path, preferring the OS data directory
/// and falling back to `~/.local/share`.
fn default_db_path() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or(StorageError::NoDataDir)?;

    let mut path = base;
    path.push("paintstock");
    path.push("db.json");
    Ok(path)
}
