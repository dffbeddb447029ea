//! Routine entry collection.
//!
//! # Responsibility
//! - Append-only log of saved routines under `skintracker-routines`.
//!
//! # Invariants
//! - Entries accumulate; multiple entries for the same date and time of day
//!   may coexist. There is no edit or delete path.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{error, info};

use crate::model::routine::RoutineEntry;
use crate::store::{read_collection, write_collection, StoragePort, ROUTINES_KEY};

/// Live view over the persisted routine log.
pub struct RoutineCollection<S: StoragePort + ?Sized> {
    store: Arc<S>,
    items: Vec<RoutineEntry>,
}

impl<S: StoragePort + ?Sized> RoutineCollection<S> {
    /// Loads the collection from the store, defaulting to empty.
    pub fn load(store: Arc<S>) -> Self {
        let items: Vec<RoutineEntry> = read_collection(store.as_ref(), ROUTINES_KEY);
        info!(
            "event=collection_load module=routines status=ok count={}",
            items.len()
        );
        Self { store, items }
    }

    pub fn list(&self) -> &[RoutineEntry] {
        &self.items
    }

    /// Appends one saved routine and persists the collection.
    pub fn create(&mut self, entry: RoutineEntry) {
        self.items.push(entry);
        self.persist();
    }

    /// Returns all routines logged for `date`, in save order.
    pub fn entries_for_date(&self, date: NaiveDate) -> impl Iterator<Item = &RoutineEntry> {
        self.items.iter().filter(move |entry| entry.date == date)
    }

    /// Re-reads the collection from the store after a change notification.
    pub fn reload(&mut self) {
        self.items = read_collection(self.store.as_ref(), ROUTINES_KEY);
    }

    fn persist(&self) {
        if let Err(err) = write_collection(self.store.as_ref(), ROUTINES_KEY, &self.items) {
            error!("event=store_write module=routines status=error key={ROUTINES_KEY} error={err}");
        }
    }
}
