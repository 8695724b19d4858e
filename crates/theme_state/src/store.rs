//! Persisted preference stores.
//!
//! A store is a durable slot for one raw string value under a fixed key.
//! Stores never panic and never make absence an error: a first run simply
//! reads `None`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::error::StoreError;

/// Key under which the theme preference is stored.
pub const STORAGE_KEY: &str = "app-theme";

/// File name used by [`FileStore`] inside its directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// A durable, synchronous key/value slot for the theme preference.
pub trait PreferenceStore: Send + Sync {
    /// Read the raw stored value, distinguishing an unreadable medium from
    /// an absent value.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium exists but cannot be read.
    fn try_read(&self) -> Result<Option<String>, StoreError>;

    /// Store a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be made durable.
    fn write(&self, value: &str) -> Result<(), StoreError>;

    /// Read the raw stored value; an unreadable medium reads as absent.
    fn read(&self) -> Option<String> {
        match self.try_read() {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "Preference store unreadable, treating as absent");
                None
            }
        }
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn try_read(&self) -> Result<Option<String>, StoreError> {
        (**self).try_read()
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        (**self).write(value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn try_read(&self) -> Result<Option<String>, StoreError> {
        (**self).try_read()
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        (**self).write(value)
    }
}

// -----------------------------------------------------------------------------
// FileStore
// -----------------------------------------------------------------------------

/// Preference store backed by a JSON object file.
///
/// The file holds a flat string map (`{"app-theme": "dark"}`) so it can be
/// shared with other keys. Writes go to a sibling temp file which is then
/// renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    key: String,
}

impl FileStore {
    /// Store using `preferences.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at_path(dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Store using the given file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: STORAGE_KEY.to_string(),
        }
    }

    /// Use a different key inside the file.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|err| write_err(io::Error::new(io::ErrorKind::InvalidData, err)))?;

        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp).map_err(write_err)?;
            file.write_all(json.as_bytes()).map_err(write_err)?;
            file.write_all(b"\n").map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

impl PreferenceStore for FileStore {
    fn try_read(&self) -> Result<Option<String>, StoreError> {
        let map = self.load_map()?;
        let value = map.get(&self.key).cloned();
        trace!(store.path = %self.path.display(), store.present = value.is_some(), "Preference read");
        Ok(value)
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        let mut map = match self.load_map() {
            Ok(map) => map,
            Err(err) => {
                warn!(store.path = %self.path.display(), error = %err, "Replacing unusable preferences file");
                BTreeMap::new()
            }
        };
        map.insert(self.key.clone(), value.to_string());
        self.write_map(&map)?;
        debug!(store.path = %self.path.display(), store.value = value, "Preference written");
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// MemoryStore
// -----------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<String>,
    unreadable: bool,
    read_only: bool,
    writes: usize,
}

/// In-memory preference store.
///
/// Clones share the same slot, so a test can hand one clone to an authority
/// and keep another to inspect or to "restart" against. Reads and writes can
/// be made to fail to exercise the fail-soft paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<MemorySlot>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        let store = Self::new();
        store.slot.lock().value = Some(value.into());
        store
    }

    /// Current raw value, bypassing failure injection.
    pub fn value(&self) -> Option<String> {
        self.slot.lock().value.clone()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.slot.lock().writes
    }

    /// Make reads fail (`true`) or succeed (`false`).
    pub fn set_unreadable(&self, unreadable: bool) {
        self.slot.lock().unreadable = unreadable;
    }

    /// Make writes fail (`true`) or succeed (`false`).
    pub fn set_read_only(&self, read_only: bool) {
        self.slot.lock().read_only = read_only;
    }
}

impl PreferenceStore for MemoryStore {
    fn try_read(&self) -> Result<Option<String>, StoreError> {
        let slot = self.slot.lock();
        if slot.unreadable {
            return Err(StoreError::Unavailable("memory store is unreadable".into()));
        }
        Ok(slot.value.clone())
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        let mut slot = self.slot.lock();
        if slot.read_only {
            return Err(StoreError::Unavailable("memory store is read-only".into()));
        }
        slot.value = Some(value.to_string());
        slot.writes += 1;
        Ok(())
    }
}
