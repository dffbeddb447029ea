//! Derived progress views.
//!
//! # Responsibility
//! - Compute read-only summaries over the entry collections.
//!
//! # Invariants
//! - Summaries are pure functions of their inputs; nothing here is
//!   persisted or cached.

pub mod weekly;
