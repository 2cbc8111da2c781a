//! A small persistent key-value store for process-wide state.

use crate::errors::{Error, Result};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String keys to string values, persisted across invocations.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// A JSON object on disk; the whole map is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                Error::State(format!("Invalid state file '{}': {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(Error::State(format!(
                "Could not read state file '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut map = self.load().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    Error::State(format!(
                        "Could not create state directory '{}': {}",
                        dir.display(),
                        e
                    ))
                })?;
                debug!("Created state directory: {:?}", dir);
            }
        }

        let json = serde_json::to_string_pretty(&map)
            .map_err(|e| Error::State(format!("Could not serialize state: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| {
            Error::State(format!(
                "Could not write state file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// A process-local store, for tests.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one key.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_string(), value.to_string());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_json_store_round_trip_creates_parent() -> Result<()> {
        let temp = tempdir().map_err(|e| Error::State(e.to_string()))?;
        let store = JsonFileStore::new(temp.path().join("data").join("state.json"));

        assert_eq!(store.get("lastOpenTimestamp")?, None);
        store.set("lastOpenTimestamp", "1700000000000")?;
        store.set("other", "x")?;
        assert_eq!(
            store.get("lastOpenTimestamp")?.as_deref(),
            Some("1700000000000")
        );

        let raw = fs::read_to_string(store.path()).map_err(|e| Error::State(e.to_string()))?;
        assert!(raw.contains("\"lastOpenTimestamp\": \"1700000000000\""));
        Ok(())
    }

    #[test]
    fn test_json_store_corrupt_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("state.json");
        fs::write(&path, "{not json")?;
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.get("k"), Err(Error::State(_))));
        // Writing recovers the file.
        assert!(store.set("k", "v").is_ok());
        assert_eq!(store.get("k").ok().flatten().as_deref(), Some("v"));
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let store = MemoryStateStore::with("a", "1");
        assert_eq!(store.get("a")?.as_deref(), Some("1"));
        store.set("a", "2")?;
        assert_eq!(store.get("a")?.as_deref(), Some("2"));
        assert_eq!(store.get("b")?, None);
        Ok(())
    }
}
