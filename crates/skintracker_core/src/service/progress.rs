//! Progress view use-case service.
//!
//! # Responsibility
//! - Track the selected week anchor and navigate it.
//! - Recompute the weekly summary from fresh store reads on demand.
//!
//! # Invariants
//! - Navigation never moves past the week containing today.
//! - `summary()` reads both collections from the store every time; the
//!   aggregation is bounded by week size, so no incremental state is kept.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::model::routine::RoutineEntry;
use crate::model::tracking::TrackingEntry;
use crate::store::{read_collection, StoragePort, ROUTINES_KEY, TRACKING_KEY};
use crate::summary::weekly::{week_bounds, weekly_summary, WeeklySummary};

/// Week-scoped progress view over the storage port.
pub struct ProgressService<S: StoragePort + ?Sized> {
    store: Arc<S>,
    anchor: NaiveDate,
}

impl<S: StoragePort + ?Sized> ProgressService<S> {
    /// Creates a service anchored on the week containing `today`.
    pub fn new(store: Arc<S>, today: NaiveDate) -> Self {
        Self {
            store,
            anchor: today,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Inclusive Monday..Sunday interval of the selected week.
    pub fn week_bounds(&self) -> (NaiveDate, NaiveDate) {
        week_bounds(self.anchor)
    }

    /// Computes the summary for the selected week from current store state.
    pub fn summary(&self) -> WeeklySummary {
        let tracking: Vec<TrackingEntry> = read_collection(self.store.as_ref(), TRACKING_KEY);
        let routines: Vec<RoutineEntry> = read_collection(self.store.as_ref(), ROUTINES_KEY);
        weekly_summary(&tracking, &routines, self.anchor)
    }

    /// Moves the anchor one week back.
    pub fn previous_week(&mut self) {
        self.anchor = self.anchor - Duration::days(7);
    }

    /// Moves the anchor one week forward, clamped at today.
    ///
    /// Returns whether the move happened.
    pub fn next_week(&mut self, today: NaiveDate) -> bool {
        let candidate = self.anchor + Duration::days(7);
        if candidate > today {
            return false;
        }
        self.anchor = candidate;
        true
    }
}
