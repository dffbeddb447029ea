//! Transient undo buffers for reversible deletes.
//!
//! # Responsibility
//! - Hold recently deleted records for same-session restore.
//! - Make the per-entity capacity an explicit configuration choice.
//!
//! # Invariants
//! - `pop` returns deletions in most-recent-first order.
//! - A bounded stack evicts its oldest entry when full; the evicted record
//!   is no longer restorable.

/// Capacity policy for an undo buffer.
///
/// The product inventory keeps every deletion of the session restorable;
/// tracking keeps only the last one. Both use this single policy type so
/// the asymmetry is configuration, not accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoCapacity {
    Unbounded,
    Bounded(usize),
}

/// LIFO buffer of deleted records.
#[derive(Debug)]
pub struct UndoStack<T> {
    capacity: UndoCapacity,
    items: Vec<T>,
}

impl<T> UndoStack<T> {
    pub fn new(capacity: UndoCapacity) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> UndoCapacity {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Buffers one deleted record, evicting the oldest when bounded and full.
    pub fn push(&mut self, item: T) {
        if let UndoCapacity::Bounded(limit) = self.capacity {
            if limit == 0 {
                return;
            }
            while self.items.len() >= limit {
                self.items.remove(0);
            }
        }
        self.items.push(item);
    }

    /// Takes the most recently deleted record, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::{UndoCapacity, UndoStack};

    #[test]
    fn unbounded_stack_restores_in_reverse_deletion_order() {
        let mut stack = UndoStack::new(UndoCapacity::Unbounded);
        stack.push("a");
        stack.push("b");
        stack.push("c");

        assert_eq!(stack.pop(), Some("c"));
        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn single_slot_stack_keeps_only_the_last_deletion() {
        let mut stack = UndoStack::new(UndoCapacity::Bounded(1));
        stack.push("a");
        stack.push("b");

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn zero_capacity_stack_drops_everything() {
        let mut stack = UndoStack::new(UndoCapacity::Bounded(0));
        stack.push("a");
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }
}
