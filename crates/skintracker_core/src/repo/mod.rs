//! Entity collections over the storage port.
//!
//! # Responsibility
//! - Own the load-at-mount / rewrite-on-mutation lifecycle of each
//!   persisted collection.
//! - Surface reversible deletes through per-entity undo buffers.
//!
//! # Invariants
//! - Every mutation rewrites the whole collection under its key.
//! - Store write failures are logged and never propagated; the in-memory
//!   state stays authoritative for the session (last writer wins).

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::product::ProductValidationError;
use crate::model::tracking::TrackingValidationError;
use crate::model::RecordId;

pub mod product_repo;
pub mod routine_repo;
pub mod tracking_repo;
pub mod undo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Collection-level errors surfaced to callers.
///
/// Storage failures are deliberately absent: per the error design they are
/// logged and degrade, never bubble.
#[derive(Debug)]
pub enum RepoError {
    Product(ProductValidationError),
    Tracking(TrackingValidationError),
    NotFound(RecordId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product(err) => write!(f, "{err}"),
            Self::Tracking(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Product(err) => Some(err),
            Self::Tracking(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ProductValidationError> for RepoError {
    fn from(value: ProductValidationError) -> Self {
        Self::Product(value)
    }
}

impl From<TrackingValidationError> for RepoError {
    fn from(value: TrackingValidationError) -> Self {
        Self::Tracking(value)
    }
}
