//! In-memory storage adapter.
//!
//! # Responsibility
//! - Back the storage port with a plain map for tests and embedding.
//!
//! # Invariants
//! - Observer notification fires after the map mutation is visible.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{lock_or_recover, ObserverSet, StoragePort, StoreObserver, StoreResult};

/// Map-backed storage port with no durability.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    observers: ObserverSet,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        lock_or_recover(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_or_recover(&self.entries).is_empty()
    }
}

impl StoragePort for MemoryStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(lock_or_recover(&self.entries).get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        lock_or_recover(&self.entries).insert(key.to_string(), value.to_string());
        self.observers.notify(key);
        Ok(())
    }

    fn subscribe(&self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }
}
