//! Product inventory collection.
//!
//! # Responsibility
//! - CRUD over the product list persisted under `skintracker-products`.
//! - Reversible delete with an unbounded session undo buffer.
//!
//! # Invariants
//! - Product identity never changes across updates.
//! - Undo re-inserts at the end of the list; original position is not
//!   preserved.

use std::sync::Arc;

use log::{error, info};

use crate::model::product::{Product, ProductDraft};
use crate::model::RecordId;
use crate::repo::undo::{UndoCapacity, UndoStack};
use crate::repo::{RepoError, RepoResult};
use crate::store::{read_collection, write_collection, StoragePort, PRODUCTS_KEY};

/// Live view over the persisted product inventory.
pub struct ProductCollection<S: StoragePort + ?Sized> {
    store: Arc<S>,
    items: Vec<Product>,
    deleted: UndoStack<Product>,
}

impl<S: StoragePort + ?Sized> ProductCollection<S> {
    /// Loads the collection from the store, defaulting to empty.
    pub fn load(store: Arc<S>) -> Self {
        let items: Vec<Product> = read_collection(store.as_ref(), PRODUCTS_KEY);
        info!(
            "event=collection_load module=products status=ok count={}",
            items.len()
        );
        Self {
            store,
            items,
            deleted: UndoStack::new(UndoCapacity::Unbounded),
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: RecordId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    /// Adds a product from form input and persists the collection.
    ///
    /// Returns the freshly allocated id.
    pub fn create(&mut self, draft: ProductDraft) -> RepoResult<RecordId> {
        let product = Product::from_draft(draft)?;
        let id = product.id;
        self.items.push(product);
        self.persist();
        Ok(id)
    }

    /// Replaces an existing product's fields by id.
    pub fn update(&mut self, product: Product) -> RepoResult<()> {
        product.validate()?;
        let position = self
            .items
            .iter()
            .position(|existing| existing.id == product.id)
            .ok_or(RepoError::NotFound(product.id))?;
        self.items[position] = product;
        self.persist();
        Ok(())
    }

    /// Removes a product by id, keeping it restorable for the session.
    ///
    /// Deleting an unknown id is a silent no-op.
    pub fn delete(&mut self, id: RecordId) {
        let Some(position) = self.items.iter().position(|product| product.id == id) else {
            return;
        };
        let removed = self.items.remove(position);
        self.deleted.push(removed);
        self.persist();
    }

    /// Restores the most recently deleted product at the end of the list.
    ///
    /// Returns `None` when nothing is buffered.
    pub fn undo_delete(&mut self) -> Option<&Product> {
        let restored = self.deleted.pop()?;
        self.items.push(restored);
        self.persist();
        self.items.last()
    }

    /// Number of deletions still restorable; drives the undo affordance.
    pub fn pending_undo(&self) -> usize {
        self.deleted.len()
    }

    /// Re-reads the collection from the store after a change notification.
    pub fn reload(&mut self) {
        self.items = read_collection(self.store.as_ref(), PRODUCTS_KEY);
    }

    fn persist(&self) {
        if let Err(err) = write_collection(self.store.as_ref(), PRODUCTS_KEY, &self.items) {
            error!("event=store_write module=products status=error key={PRODUCTS_KEY} error={err}");
        }
    }
}
