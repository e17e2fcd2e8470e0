//! Core domain logic for the quickdo to-do widget.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod tooltip;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{remaining_count, FilterCategory, FilterView};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::mirror::{CollectionMirror, PersistenceMirror, TODOS_SLOT_KEY};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::task_store::TaskStore;
pub use tooltip::hover::{HoverTooltipController, TooltipState, POINTER_OFFSET, REVEAL_DELAY};
pub use tooltip::timer::{DelayCallback, DelayScheduler, ThreadDelayScheduler, TimerGuard};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
