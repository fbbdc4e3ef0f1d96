//! Deferred task completion
//!
//! Completing a task from the dashboard is queued first and committed when the tasks zone is
//! deactivated. Toggling a queued task again simply un-queues it.

use serde::Serialize;

/// A task inside its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaskRef {
    pub list_id: String,
    pub task_id: String,
}

impl TaskRef {
    pub fn new(list_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            task_id: task_id.into(),
        }
    }
}

/// Tasks queued for completion, in the order they were queued.
#[derive(Debug, Clone, Default)]
pub struct PendingCompletions {
    queued: Vec<TaskRef>,
}

impl PendingCompletions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue or un-queue `task`. Returns whether it is queued afterwards.
    pub fn toggle(&mut self, task: TaskRef) -> bool {
        if let Some(pos) = self.queued.iter().position(|t| *t == task) {
            self.queued.remove(pos);
            false
        } else {
            self.queued.push(task);
            true
        }
    }

    pub fn is_queued(&self, task: &TaskRef) -> bool {
        self.queued.contains(task)
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Drain the queue for committing.
    pub fn take_all(&mut self) -> Vec<TaskRef> {
        std::mem::take(&mut self.queued)
    }
}

/// Outcome of a commit; never fails as a whole.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommitReport {
    pub committed: Vec<TaskRef>,
    pub failed: Vec<(TaskRef, String)>,
}

impl CommitReport {
    pub fn all_committed(&self) -> bool {
        self.failed.is_empty()
    }
}
