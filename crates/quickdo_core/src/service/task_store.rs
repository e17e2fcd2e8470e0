//! Task store use-case service.
//!
//! # Responsibility
//! - Own the ordered in-memory task collection.
//! - Invoke the injected mirror after every mutation.
//!
//! # Invariants
//! - Insertion order is the display order and survives all operations.
//! - Invalid input is ignored, never signaled; storage failures propagate.
//! - No-op calls (empty text, unknown id) leave durable state untouched.

use crate::model::task::{Task, TaskId};
use crate::repo::mirror::CollectionMirror;
use crate::repo::slot_repo::RepoResult;
use log::{debug, info};

/// Owner of the task collection, constructed once per session and passed
/// by reference to consumers.
pub struct TaskStore<M: CollectionMirror> {
    tasks: Vec<Task>,
    mirror: M,
}

impl<M: CollectionMirror> TaskStore<M> {
    /// Constructs a store hydrated from the mirror's persisted collection.
    pub fn hydrate(mirror: M) -> RepoResult<Self> {
        let tasks = mirror.load()?;
        info!(
            "event=store_hydrate module=service status=ok count={}",
            tasks.len()
        );
        Ok(Self { tasks, mirror })
    }

    /// Appends a new task unless the trimmed text is empty.
    ///
    /// Returns the new task id, or `None` for the silent empty-text no-op.
    pub fn add(&mut self, text: &str) -> RepoResult<Option<TaskId>> {
        if text.trim().is_empty() {
            debug!("event=task_add module=service status=rejected reason=empty_text");
            return Ok(None);
        }

        let task = Task::new(text);
        let id = task.id.clone();
        self.tasks.push(task);
        self.mirror.replace(&self.tasks)?;
        debug!(
            "event=task_add module=service status=ok id={id} count={}",
            self.tasks.len()
        );
        Ok(Some(id))
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `false` when no task matches; nothing is written in that
    /// case.
    pub fn toggle_status(&mut self, id: &TaskId) -> RepoResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == *id) else {
            debug!("event=task_toggle module=service status=noop id={id}");
            return Ok(false);
        };

        task.toggle();
        let is_completed = task.is_completed;
        self.mirror.replace(&self.tasks)?;
        debug!("event=task_toggle module=service status=ok id={id} is_completed={is_completed}");
        Ok(true)
    }

    /// Empties the collection and wipes the durable store.
    pub fn clear_all(&mut self) -> RepoResult<()> {
        self.tasks.clear();
        self.mirror.wipe()?;
        info!("event=task_clear module=service status=ok");
        Ok(())
    }

    /// Returns the full ordered collection.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }
}
