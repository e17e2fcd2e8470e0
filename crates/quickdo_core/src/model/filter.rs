//! Status filter projections over the task collection.
//!
//! # Responsibility
//! - Derive read-only status projections at read time.
//! - Derive the remaining-count display value over the unfiltered list.
//!
//! # Invariants
//! - Projections never mutate or reorder the collection.
//! - `Active` and `Completed` partition `All`.
//! - The remaining count ignores the active selection.

use crate::model::task::Task;

/// Named subset selector applied to the collection at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterCategory {
    /// Identity projection.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks.
    Completed,
}

impl FilterCategory {
    /// Returns whether `task` belongs to this category.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed,
            Self::Completed => task.is_completed,
        }
    }

    /// Projects the tasks in this category, preserving insertion order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    /// Stable lowercase name used at API boundaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a boundary-provided category name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Count of not-completed tasks over the unfiltered collection.
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.is_completed).count()
}

/// Read-side view holding only the current filter selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterView {
    selected: FilterCategory,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the active selection.
    pub fn select(&mut self, category: FilterCategory) {
        self.selected = category;
    }

    /// Returns the active selection.
    pub fn selected(&self) -> FilterCategory {
        self.selected
    }

    /// Recomputes the projection for the active selection.
    pub fn project<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        self.selected.apply(tasks)
    }

    /// Remaining-count display value, independent of the selection.
    pub fn remaining(&self, tasks: &[Task]) -> usize {
        remaining_count(tasks)
    }
}
