//! File-backed storage adapter.
//!
//! # Responsibility
//! - Persist the key-value map as one JSON object file.
//! - Degrade to an empty map when the file is missing or unreadable.
//!
//! # Invariants
//! - The in-memory map only commits a write after the file write succeeded.
//! - Observers are notified only for committed writes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{error, info};

use super::{lock_or_recover, ObserverSet, StoragePort, StoreObserver, StoreResult};

/// Storage port persisted as a single JSON file of key to raw value.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
    observers: ObserverSet,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing contents.
    ///
    /// A missing file yields an empty store. A malformed or unreadable file
    /// is logged and also yields an empty store; the worst case is losing
    /// state that could not be parsed anyway.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        info!(
            "event=store_open module=store status=ok path={} keys={}",
            path.display(),
            entries.len()
        );
        Self {
            path,
            entries: Mutex::new(entries),
            observers: ObserverSet::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl StoragePort for FileStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(lock_or_recover(&self.entries).get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        {
            let mut entries = lock_or_recover(&self.entries);
            let mut updated = entries.clone();
            updated.insert(key.to_string(), value.to_string());
            self.persist(&updated)?;
            *entries = updated;
        }
        self.observers.notify(key);
        Ok(())
    }

    fn subscribe(&self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            error!(
                "event=store_open module=store status=degraded path={} error={err}",
                path.display()
            );
            return BTreeMap::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(err) => {
            error!(
                "event=store_open module=store status=degraded path={} error={err}",
                path.display()
            );
            BTreeMap::new()
        }
    }
}
