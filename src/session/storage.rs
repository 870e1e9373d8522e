//! Backends holding the persisted session subset.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[cfg(not(target_arch = "wasm32"))]
use dioxus_logger::tracing;

use crate::error::StorageError;

/// Key-value store for serialized session state.
pub trait SessionStorage {
    /// Returns the value stored under `key`, `None` when nothing was stored yet
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// One JSON file per key in a directory, used by the desktop & mobile builds.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the platform data directory, e.g. `~/.local/share/spacex-explorer`
    pub fn in_data_dir() -> Result<Self, StorageError> {
        let dir = dirs::data_dir().ok_or_else(|| {
            StorageError::Unavailable("no data directory on this platform".to_string())
        })?;

        Ok(Self::new(dir.join("spacex-explorer")))
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)?;

        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Storage backend of the current platform.
#[cfg(target_arch = "wasm32")]
pub fn platform_storage() -> Box<dyn SessionStorage> {
    Box::new(LocalStorage)
}

/// Storage backend of the current platform.
///
/// Falls back to in-memory storage when the platform backend can't be located, the
/// session then lasts until the app closes.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_storage() -> Box<dyn SessionStorage> {
    match FileStorage::in_data_dir() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("{}, keeping session in memory", e);

            Box::new(MemoryStorage::new())
        }
    }
}
