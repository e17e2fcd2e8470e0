//! Domain model for the to-do widget core.
//!
//! # Responsibility
//! - Define the canonical task record and its wire shape.
//! - Define read-time status projections.
//!
//! # Invariants
//! - Every task is identified by a stable opaque `TaskId`.
//! - Removal is bulk-only (`clear_all`); there is no single-item delete.

pub mod filter;
pub mod task;
