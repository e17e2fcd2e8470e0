//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record shared by store, mirror and views.
//! - Own identifier generation for newly created tasks.
//!
//! # Invariants
//! - `id` is stable, opaque and never reused for another task.
//! - `text` is immutable after creation; only `is_completed` may change.
//! - Wire field names (`id`, `text`, `isCompleted`) are the durable slot
//!   format and must not drift.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier for a task.
///
/// Generated ids are UUID v4 strings, but the durable format treats ids as
/// plain text, so hydrated ids are accepted verbatim as long as they are
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Validation errors for caller-provided task data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Caller-provided identifier was empty.
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do record.
///
/// Serialization matches the durable slot format exactly: a task is one
/// element of the JSON array stored under the `todos` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable opaque identifier assigned at creation.
    pub id: TaskId,
    /// User-supplied text, stored verbatim.
    pub text: String,
    /// Completion flag. Serialized as `isCompleted` on the wire.
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Task {
    /// Creates a new task with a generated identifier and default status.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            text: text.into(),
            is_completed: false,
        }
    }

    /// Creates a task with a caller-provided identifier.
    ///
    /// Used by hydration-adjacent paths where identity already exists.
    pub fn with_id(
        id: impl Into<TaskId>,
        text: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(Self {
            id,
            text: text.into(),
            is_completed: false,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
