//! Storage port contracts and JSON codec helpers.
//!
//! # Responsibility
//! - Define the key-value port the rest of the crate depends on.
//! - Provide typed collection read/write helpers with degrade-to-default
//!   reads.
//! - Own the change-notification contract consumed by mounted views.
//!
//! # Invariants
//! - Every successful write notifies all registered observers synchronously,
//!   in registration order, after the write completed.
//! - A failed read or a malformed value degrades to the caller's default
//!   (empty collection) and is logged; it never propagates as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the product inventory collection.
pub const PRODUCTS_KEY: &str = "skintracker-products";
/// Key holding the tracking entry collection.
pub const TRACKING_KEY: &str = "skintracker-tracking";
/// Key holding the routine entry collection.
pub const ROUTINES_KEY: &str = "skintracker-routines";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage adapter failures.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Change listener registered on a storage port.
///
/// Handlers must be idempotent: reloading the same key twice has to land in
/// the same state.
pub trait StoreObserver: Send + Sync {
    fn on_store_update(&self, key: &str);
}

/// Injected key-value storage capability.
///
/// Views and collections depend on this trait, never on a concrete adapter
/// or a process-wide singleton.
pub trait StoragePort: Send + Sync {
    /// Returns the raw JSON string stored under `key`, if any.
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key` and notifies observers on success.
    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Registers a change observer. Delivery follows registration order.
    fn subscribe(&self, observer: Arc<dyn StoreObserver>);
}

/// Reads a JSON-encoded collection, degrading to empty on any failure.
pub fn read_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: StoragePort + ?Sized,
{
    let raw = match store.get_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("event=store_read module=store status=degraded key={key} error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            error!("event=store_decode module=store status=degraded key={key} error={err}");
            Vec::new()
        }
    }
}

/// Serializes a collection and writes it under `key`.
pub fn write_collection<T, S>(store: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: StoragePort + ?Sized,
{
    let payload = serde_json::to_string(items)?;
    store.set_raw(key, &payload)
}

/// Shared observer list used by the bundled adapters.
#[derive(Default)]
pub(crate) struct ObserverSet {
    observers: Mutex<Vec<Arc<dyn StoreObserver>>>,
}

impl ObserverSet {
    pub(crate) fn push(&self, observer: Arc<dyn StoreObserver>) {
        lock_or_recover(&self.observers).push(observer);
    }

    /// Notifies every observer with the written key, in registration order.
    ///
    /// The list is snapshotted first so a handler may subscribe further
    /// observers without deadlocking.
    pub(crate) fn notify(&self, key: &str) {
        let snapshot: Vec<Arc<dyn StoreObserver>> = lock_or_recover(&self.observers).clone();
        for observer in snapshot {
            observer.on_store_update(key);
        }
    }
}

/// Recovers from a poisoned lock; the guarded data is plain state that
/// stays valid across a panicked holder.
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
