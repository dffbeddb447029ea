//! Domain model for the skincare tracker.
//!
//! # Responsibility
//! - Define the records persisted by the entity collections.
//! - Validate form-level constraints before any persistence happens.
//!
//! # Invariants
//! - Every list-backed record carries a stable `RecordId` assigned once at
//!   creation time and never changed afterwards.
//! - Serialized field names match the persisted JSON layout (camelCase).

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

pub mod product;
pub mod routine;
pub mod tracking;

/// Stable identifier for list-backed records.
///
/// Creation epoch milliseconds, kept as a type alias to make semantic
/// intent explicit in signatures.
pub type RecordId = i64;

static LAST_RECORD_ID: AtomicI64 = AtomicI64::new(0);

/// Allocates the next record id from the wall clock.
///
/// Ids are creation timestamps in epoch milliseconds. Two allocations in the
/// same millisecond are disambiguated by bumping past the previous id, so
/// ids stay unique within one process.
pub(crate) fn next_record_id() -> RecordId {
    let now = Utc::now().timestamp_millis();
    let update = LAST_RECORD_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(now.max(last + 1))
    });
    match update {
        Ok(last) | Err(last) => now.max(last + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::next_record_id;

    #[test]
    fn record_ids_are_strictly_increasing() {
        let first = next_record_id();
        let second = next_record_id();
        let third = next_record_id();
        assert!(first < second);
        assert!(second < third);
    }
}
