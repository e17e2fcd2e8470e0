//! Durable mirror of the task collection.
//!
//! # Responsibility
//! - Keep the `todos` slot synchronized with the in-memory collection.
//! - Hydrate the initial collection on startup.
//!
//! # Invariants
//! - Every write replaces the whole serialized collection; there is no
//!   incremental patch protocol.
//! - Malformed persisted data hydrates as an empty collection and is never
//!   surfaced as an error.
//! - `wipe` clears the entire store and is a distinct operation from
//!   writing an empty collection.

use crate::model::task::Task;
use crate::repo::slot_repo::{RepoError, RepoResult, SlotRepository};
use log::{debug, warn};

/// Slot key holding the serialized task collection.
pub const TODOS_SLOT_KEY: &str = "todos";

/// Persistence port invoked by the task store after each mutation.
pub trait CollectionMirror {
    /// Loads the persisted collection; empty when absent or malformed.
    fn load(&self) -> RepoResult<Vec<Task>>;
    /// Replaces the persisted collection with the given one.
    fn replace(&self, tasks: &[Task]) -> RepoResult<()>;
    /// Clears the entire durable store.
    fn wipe(&self) -> RepoResult<()>;
}

/// Slot-backed mirror serializing the collection as a JSON array.
pub struct PersistenceMirror<R: SlotRepository> {
    repo: R,
}

impl<R: SlotRepository> PersistenceMirror<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: SlotRepository> CollectionMirror for PersistenceMirror<R> {
    fn load(&self) -> RepoResult<Vec<Task>> {
        let Some(raw) = self.repo.read_slot(TODOS_SLOT_KEY)? else {
            debug!("event=hydrate module=mirror status=ok source=absent count=0");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!(
                    "event=hydrate module=mirror status=ok source=slot count={}",
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(err) => {
                // Malformed slot data is discarded, not propagated.
                warn!(
                    "event=hydrate module=mirror status=malformed slot={TODOS_SLOT_KEY} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn replace(&self, tasks: &[Task]) -> RepoResult<()> {
        let serialized = serde_json::to_string(tasks)
            .map_err(|err| RepoError::InvalidData(format!("serialize task collection: {err}")))?;
        self.repo.write_slot(TODOS_SLOT_KEY, &serialized)?;
        debug!(
            "event=mirror_replace module=mirror status=ok count={}",
            tasks.len()
        );
        Ok(())
    }

    fn wipe(&self) -> RepoResult<()> {
        self.repo.wipe_all()?;
        debug!("event=mirror_wipe module=mirror status=ok");
        Ok(())
    }
}
