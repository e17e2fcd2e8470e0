//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define storage-facing contracts for slot access and collection
//!   mirroring.
//! - Isolate SQLite and wire-format details from service orchestration.
//!
//! # Invariants
//! - The mirror holds no independent copy of truth; it replays whatever
//!   the store hands it.

pub mod mirror;
pub mod slot_repo;
