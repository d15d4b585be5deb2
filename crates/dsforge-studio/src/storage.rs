//! Persistence of studio state.
//!
//! A [`Storage`] holds at most one [`StudioSnapshot`]. The schema version
//! lives in the key: a breaking change to the snapshot shape gets a new key
//! rather than a migration, so older data is simply not found.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StorageError;
use crate::model::Brand;

/// Key (file name for [`JsonFileStorage`]) of the current snapshot schema.
pub const STORAGE_KEY: &str = "dsforge-studio.v1.json";

/// Everything needed to restore a [`Studio`](crate::Studio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioSnapshot {
    pub brands: Vec<Brand>,
    pub active_brand_id: String,
    pub active_theme_id: String,
}

/// A place a snapshot can be saved to and loaded from.
pub trait Storage {
    /// Loads the stored snapshot, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<StudioSnapshot>, StorageError>;

    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &StudioSnapshot) -> Result<(), StorageError>;

    /// Removes the stored snapshot. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Stores the snapshot as pretty JSON in `dir/dsforge-studio.v1.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_KEY)
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<StudioSnapshot>, StorageError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        let snapshot = serde_json::from_str(&content)?;
        info!(path = %path.display(), "loaded studio snapshot");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StudioSnapshot) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path();
        let json = serde_json::to_string_pretty(snapshot)?;
        // The snapshot file is only ever replaced whole.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|source| StorageError::Io {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), brands = snapshot.brands.len(), "saved studio snapshot");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "cleared studio snapshot");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// In-process storage holding the serialized snapshot.
///
/// Snapshots go through JSON just like [`JsonFileStorage`], so a round trip
/// here exercises the same serialization.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<StudioSnapshot>, StorageError> {
        match self.slot().as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &StudioSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)?;
        *self.slot() = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snapshot() -> StudioSnapshot {
        let brand = Brand::new("Acme", "Rockets");
        StudioSnapshot {
            active_brand_id: brand.id.clone(),
            active_theme_id: brand.themes[0].id.clone(),
            brands: vec![brand],
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("store"));
        assert!(storage.load().unwrap().is_none());

        let saved = snapshot();
        storage.save(&saved).unwrap();
        assert!(storage.path().ends_with(STORAGE_KEY));
        assert_eq!(storage.load().unwrap(), Some(saved));
    }

    #[test]
    fn test_file_clear() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        storage.clear().unwrap();

        storage.save(&snapshot()).unwrap();
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_corrupt() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        fs::write(storage.path(), "{ not json").unwrap();
        assert!(matches!(storage.load(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert!(json.get("activeBrandId").is_some());
        assert!(json.get("activeThemeId").is_some());
        assert!(json["brands"][0]["themes"][0]["tokens"]["color"].is_object());
    }

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let saved = snapshot();
        storage.save(&saved).unwrap();
        assert!(storage.raw().unwrap().contains("\"activeBrandId\""));
        assert_eq!(storage.load().unwrap(), Some(saved));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
