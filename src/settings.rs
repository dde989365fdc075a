//! Persisted save record
//!
//! Highest reached level plus audio toggles. Read once at startup, written
//! whenever a level is solved or a toggle changes. Stored in LocalStorage on
//! the web and as a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::level::LevelId;

/// The persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    pub highest_group: u32,
    pub highest_index: u32,
    pub sound_enabled: bool,
    pub music_enabled: bool,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            highest_group: 1,
            highest_index: 1,
            sound_enabled: true,
            music_enabled: true,
        }
    }
}

impl SaveRecord {
    pub fn highest(&self) -> LevelId {
        LevelId::new(self.highest_group, self.highest_index)
    }

    /// Raise the highest reached level; returns true if it changed
    pub fn reach(&mut self, level: LevelId) -> bool {
        if level <= self.highest() {
            return false;
        }
        self.highest_group = level.group;
        self.highest_index = level.index;
        true
    }

    /// Levels up to the highest reached are playable
    pub fn is_unlocked(&self, level: LevelId) -> bool {
        level <= self.highest()
    }
}

/// Where the save record lives
pub trait RecordStore {
    /// Stored record, or the default if nothing was saved yet
    fn load(&self) -> Result<SaveRecord, StoreError>;
    fn save(&mut self, record: &SaveRecord) -> Result<(), StoreError>;
}

/// Volatile store (tests, hosts without persistence)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<SaveRecord>,
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SaveRecord) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&SaveRecord> {
        self.record.as_ref()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<SaveRecord, StoreError> {
        Ok(self.record.clone().unwrap_or_default())
    }

    fn save(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }
}

/// JSON file store (native)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RecordStore for FileStore {
    fn load(&self) -> Result<SaveRecord, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => {
                let record = serde_json::from_str(&json)?;
                log::info!("Loaded save record from {}", self.path.display());
                Ok(record)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No save record found, starting fresh");
                Ok(SaveRecord::default())
            }
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Save record written");
        Ok(())
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "shape_slice_record";

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl RecordStore for LocalStorageStore {
    fn load(&self) -> Result<SaveRecord, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                let record = serde_json::from_str(&json)?;
                log::info!("Loaded save record from LocalStorage");
                Ok(record)
            }
            Ok(None) => {
                log::info!("No save record found, starting fresh");
                Ok(SaveRecord::default())
            }
            Err(_) => Err(StoreError::Unavailable),
        }
    }

    fn save(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(record)?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StoreError::Unavailable)?;
        log::info!("Save record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_only_raises() {
        let mut record = SaveRecord::default();
        assert!(record.reach(LevelId::new(1, 2)));
        assert_eq!(record.highest(), LevelId::new(1, 2));
        // Replaying an earlier level doesn't lower it
        assert!(!record.reach(LevelId::new(1, 1)));
        assert_eq!(record.highest(), LevelId::new(1, 2));
        assert!(record.reach(LevelId::new(2, 1)));
        assert_eq!(record.highest_group, 2);
    }

    #[test]
    fn test_unlocked() {
        let record = SaveRecord {
            highest_group: 2,
            highest_index: 3,
            ..Default::default()
        };
        assert!(record.is_unlocked(LevelId::new(1, 9)));
        assert!(record.is_unlocked(LevelId::new(2, 3)));
        assert!(!record.is_unlocked(LevelId::new(2, 4)));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), SaveRecord::default());
        let record = SaveRecord {
            sound_enabled: false,
            ..Default::default()
        };
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), record);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("record.json"));
        assert_eq!(store.load().unwrap(), SaveRecord::default());

        let record = SaveRecord {
            highest_group: 3,
            highest_index: 7,
            sound_enabled: true,
            music_enabled: false,
        };
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), record);
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record: SaveRecord = serde_json::from_str(r#"{ "highest_group": 4 }"#).unwrap();
        assert_eq!(record.highest_group, 4);
        assert_eq!(record.highest_index, 1);
        assert!(record.music_enabled);
    }
}
