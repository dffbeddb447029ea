//! Skin-condition tracking domain model.
//!
//! # Responsibility
//! - Define the daily self-report record (rating, concerns, notes).
//! - Validate the rating range before persistence.
//!
//! # Invariants
//! - `skin_rating` is always within `MIN_SKIN_RATING..=MAX_SKIN_RATING`.
//! - At most one entry per calendar date is enforced by the collection's
//!   create path, not by this model.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{next_record_id, RecordId};

/// Lowest valid skin rating.
pub const MIN_SKIN_RATING: u8 = 1;
/// Highest valid skin rating.
pub const MAX_SKIN_RATING: u8 = 5;

/// Concern names offered by the tracking form, all initially inactive.
pub const DEFAULT_CONCERNS: [&str; 5] = ["acne", "dryness", "oiliness", "redness", "sensitivity"];

/// Validation failures for tracking create/update input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingValidationError {
    /// Rating outside the 1..=5 scale.
    RatingOutOfRange(u8),
}

impl Display for TrackingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RatingOutOfRange(value) => write!(
                f,
                "skin rating {value} is outside {MIN_SKIN_RATING}..={MAX_SKIN_RATING}"
            ),
        }
    }
}

impl Error for TrackingValidationError {}

/// One day's self-reported skin condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEntry {
    /// Stable id; creation timestamp in epoch milliseconds.
    pub id: RecordId,
    /// Calendar date the report is about, ISO-8601 on the wire.
    pub date: NaiveDate,
    /// Overall rating on the 1..=5 scale.
    pub skin_rating: u8,
    /// Concern name to active flag.
    #[serde(default)]
    pub concerns: BTreeMap<String, bool>,
    #[serde(default)]
    pub notes: String,
}

/// Form-level input for creating or editing a tracking entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingDraft {
    pub date: NaiveDate,
    pub skin_rating: u8,
    pub concerns: BTreeMap<String, bool>,
    pub notes: String,
}

impl TrackingEntry {
    /// Builds an entry from form input with a freshly allocated id.
    pub fn from_draft(draft: TrackingDraft) -> Result<Self, TrackingValidationError> {
        Self::with_id(next_record_id(), draft)
    }

    /// Builds an entry with a caller-provided stable id.
    ///
    /// Used by the same-date replace path, which keeps the replaced
    /// entry's identity.
    pub fn with_id(id: RecordId, draft: TrackingDraft) -> Result<Self, TrackingValidationError> {
        let entry = Self {
            id,
            date: draft.date,
            skin_rating: draft.skin_rating,
            concerns: draft.concerns,
            notes: draft.notes,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks the rating range without touching identity.
    pub fn validate(&self) -> Result<(), TrackingValidationError> {
        if !(MIN_SKIN_RATING..=MAX_SKIN_RATING).contains(&self.skin_rating) {
            return Err(TrackingValidationError::RatingOutOfRange(self.skin_rating));
        }
        Ok(())
    }

    /// Returns the names of concerns flagged active, in key order.
    pub fn active_concerns(&self) -> Vec<&str> {
        self.concerns
            .iter()
            .filter(|(_, active)| **active)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Returns the default concern map offered by the tracking form.
pub fn default_concerns() -> BTreeMap<String, bool> {
    DEFAULT_CONCERNS
        .iter()
        .map(|name| (name.to_string(), false))
        .collect()
}
