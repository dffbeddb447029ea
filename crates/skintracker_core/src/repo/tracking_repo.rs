//! Tracking entry collection.
//!
//! # Responsibility
//! - CRUD over the daily skin reports persisted under `skintracker-tracking`.
//! - Enforce the one-entry-per-date rule on the create path.
//! - Reversible delete with a single-slot undo buffer.
//!
//! # Invariants
//! - Creating for an already-logged date replaces that entry's fields and
//!   keeps its id.
//! - The id-based update path does not re-check date collisions; an edit
//!   can move an entry onto an occupied date. Carried as-is from the
//!   reference behavior.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{error, info};

use crate::model::tracking::{TrackingDraft, TrackingEntry};
use crate::model::RecordId;
use crate::repo::undo::{UndoCapacity, UndoStack};
use crate::repo::{RepoError, RepoResult};
use crate::store::{read_collection, write_collection, StoragePort, TRACKING_KEY};

/// Only the most recent tracking deletion stays restorable.
const TRACKING_UNDO_SLOTS: usize = 1;

/// Live view over the persisted tracking entries.
pub struct TrackingCollection<S: StoragePort + ?Sized> {
    store: Arc<S>,
    items: Vec<TrackingEntry>,
    deleted: UndoStack<TrackingEntry>,
}

impl<S: StoragePort + ?Sized> TrackingCollection<S> {
    /// Loads the collection from the store, defaulting to empty.
    pub fn load(store: Arc<S>) -> Self {
        let items: Vec<TrackingEntry> = read_collection(store.as_ref(), TRACKING_KEY);
        info!(
            "event=collection_load module=tracking status=ok count={}",
            items.len()
        );
        Self {
            store,
            items,
            deleted: UndoStack::new(UndoCapacity::Bounded(TRACKING_UNDO_SLOTS)),
        }
    }

    pub fn list(&self) -> &[TrackingEntry] {
        &self.items
    }

    pub fn get(&self, id: RecordId) -> Option<&TrackingEntry> {
        self.items.iter().find(|entry| entry.id == id)
    }

    /// Returns the entry logged for `date`, if any.
    pub fn entry_for_date(&self, date: NaiveDate) -> Option<&TrackingEntry> {
        self.items.iter().find(|entry| entry.date == date)
    }

    /// Saves a report, replacing any existing entry for the same date.
    ///
    /// A same-date replace keeps the replaced entry's id; a novel date
    /// appends with a fresh id. Returns the id either way.
    pub fn create(&mut self, draft: TrackingDraft) -> RepoResult<RecordId> {
        if let Some(position) = self.items.iter().position(|entry| entry.date == draft.date) {
            let id = self.items[position].id;
            self.items[position] = TrackingEntry::with_id(id, draft)?;
            self.persist();
            return Ok(id);
        }

        let entry = TrackingEntry::from_draft(draft)?;
        let id = entry.id;
        self.items.push(entry);
        self.persist();
        Ok(id)
    }

    /// Replaces an existing entry's fields by id.
    pub fn update(&mut self, entry: TrackingEntry) -> RepoResult<()> {
        entry.validate()?;
        let position = self
            .items
            .iter()
            .position(|existing| existing.id == entry.id)
            .ok_or(RepoError::NotFound(entry.id))?;
        self.items[position] = entry;
        self.persist();
        Ok(())
    }

    /// Removes an entry by id, keeping only this deletion restorable.
    ///
    /// Deleting an unknown id is a silent no-op. A second delete before an
    /// undo makes the first deletion unrecoverable.
    pub fn delete(&mut self, id: RecordId) {
        let Some(position) = self.items.iter().position(|entry| entry.id == id) else {
            return;
        };
        let removed = self.items.remove(position);
        self.deleted.push(removed);
        self.persist();
    }

    /// Restores the buffered deletion at the end of the list.
    pub fn undo_delete(&mut self) -> Option<&TrackingEntry> {
        let restored = self.deleted.pop()?;
        self.items.push(restored);
        self.persist();
        self.items.last()
    }

    pub fn pending_undo(&self) -> usize {
        self.deleted.len()
    }

    /// Re-reads the collection from the store after a change notification.
    pub fn reload(&mut self) {
        self.items = read_collection(self.store.as_ref(), TRACKING_KEY);
    }

    fn persist(&self) {
        if let Err(err) = write_collection(self.store.as_ref(), TRACKING_KEY, &self.items) {
            error!("event=store_write module=tracking status=error key={TRACKING_KEY} error={err}");
        }
    }
}
