//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the storage port and aggregator into view-level APIs.
//! - Keep presentation layers decoupled from storage and week math.

pub mod progress;
