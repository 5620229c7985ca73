//! Durable preference storage
//!
//! Four fixed string-keyed slots back the persisted preferences. Storage is
//! treated as non-failing at the trait boundary: absent values are the
//! default case, and implementation failures are logged and swallowed
//! (fail-soft), never propagated to the store.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

/// Fixed storage keys, one per persisted preference slot.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const THEME_MODE: &str = "theme_mode";
    pub const SPACING: &str = "spacing";
    pub const TABLE_BORDER: &str = "table_border";
}

/// The durable key-value collaborator.
///
/// `get` returns `None` for absent slots; `set` writes synchronously. No
/// transactional guarantee is required of implementations.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Internal failure causes of the file-backed store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

/// Volatile in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

/// TOML-file-backed store.
///
/// The document is read once at open; each `set` updates the in-memory map
/// and rewrites the file synchronously. A missing or unreadable file opens
/// as empty, and write failures leave the in-memory value in place — both
/// paths warn and proceed.
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create on first write) the preference file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::load(&path) {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    "failed to load preference file {}: {err}",
                    path.display()
                );
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let text = toml::to_string(values)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush(&values) {
            warn!(
                "failed to persist preference {key} to {}: {err}",
                self.path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_path(name: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "tinct-storage-{}-{n}-{name}.toml",
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(keys::THEME), None);
        store.set(keys::THEME, "luxury");
        assert_eq!(store.get(keys::THEME), Some("luxury".to_string()));
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let path = temp_path("persist");
        {
            let store = FileStore::open(&path);
            store.set(keys::THEME, "cupcake");
            store.set(keys::TABLE_BORDER, "false");
        }
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(keys::THEME), Some("cupcake".to_string()));
        assert_eq!(reopened.get(keys::TABLE_BORDER), Some("false".to_string()));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_opens_empty_on_garbage() {
        let path = temp_path("garbage");
        fs::write(&path, "not = [valid").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get(keys::THEME), None);
        let _ = fs::remove_file(&path);
    }
}
