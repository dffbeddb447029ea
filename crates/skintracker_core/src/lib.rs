//! Core domain logic for SkinTracker.
//! This crate is the single source of truth for business invariants:
//! entity collections, the weekly progress aggregation, and the storage
//! port they persist through.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod summary;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::product::{Product, ProductCategory, ProductDraft, ProductValidationError};
pub use model::routine::{RoutineEntry, RoutineProduct, RoutineTime};
pub use model::tracking::{
    default_concerns, TrackingDraft, TrackingEntry, TrackingValidationError, MAX_SKIN_RATING,
    MIN_SKIN_RATING,
};
pub use model::RecordId;
pub use repo::product_repo::ProductCollection;
pub use repo::routine_repo::RoutineCollection;
pub use repo::tracking_repo::TrackingCollection;
pub use repo::undo::{UndoCapacity, UndoStack};
pub use repo::{RepoError, RepoResult};
pub use service::progress::ProgressService;
pub use store::{
    read_collection, write_collection, FileStore, MemoryStore, StoragePort, StoreError,
    StoreObserver, StoreResult, PRODUCTS_KEY, ROUTINES_KEY, TRACKING_KEY,
};
pub use summary::weekly::{
    week_bounds, week_start, weekly_summary, DayCompletion, ProductUsage, RatingTrend,
    RoutineAdherence, WeeklySummary, DAYS_PER_WEEK,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
