//! Key/value persistence for the best score
//!
//! Features:
//! - Injected `ScoreStore` handle instead of a process-wide singleton
//! - In-memory backend for tests and throwaway sessions
//! - JSON file backend with tmp → save rotation
//!
//! Stores never fail the caller. Unreadable data reads as absent and write
//! failures are logged.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scalar key/value storage
pub trait ScoreStore {
    /// Read a value, `None` if absent
    fn get(&self, key: &str) -> Option<f64>;
    /// Write a value
    fn set(&mut self, key: &str, value: f64);
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Option<f64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: f64) {
        (**self).set(key, value)
    }
}

/// Volatile store backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }
}

/// Store persisted as a JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, f64>,
}

impl JsonFileStore {
    /// Open (or start) a store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HashMap<String, f64>>(&json) {
                Ok(values) => {
                    log::info!("Loaded {} stored values from {}", values.len(), path.display());
                    values
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt store {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => {
                log::info!("No store at {}, starting fresh", path.display());
                HashMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            log::warn!("Failed to save {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT_FILE: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("sky_hop_store_{}_{}.json", std::process::id(), n))
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("BEST_SCORE"), None);
        store.set("BEST_SCORE", 42.5);
        assert_eq!(store.get("BEST_SCORE"), Some(42.5));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = temp_path();
        {
            let mut store = JsonFileStore::open(&path);
            assert_eq!(store.get("BEST_SCORE"), None);
            store.set("BEST_SCORE", 17.25);
        }
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("BEST_SCORE"), Some(17.25));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_corrupt_starts_empty() {
        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("BEST_SCORE"), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryStore::new());
        store.set("k", 1.0);
        assert_eq!(store.get("k"), Some(1.0));
    }
}
