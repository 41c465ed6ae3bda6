//! Derived counters for the status readout and bulk-clear action.

use crate::model::task::Task;
use serde::Serialize;

/// Counts over the full, unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub remaining: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            remaining: tasks.len() - completed,
            completed,
        }
    }

    /// Status readout, e.g. `1 task remaining`.
    pub fn remaining_label(&self) -> String {
        format!("{} {} remaining", self.remaining, plural_task(self.remaining))
    }

    /// Label of the bulk-clear action.
    pub fn clear_label(&self) -> String {
        format!("Clear Completed ({})", self.completed)
    }

    /// Bulk clear is disabled iff nothing is completed.
    pub fn can_clear(&self) -> bool {
        self.completed > 0
    }
}

pub(crate) fn plural_task(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStats;
    use crate::model::task::Task;

    #[test]
    fn counts_and_labels_follow_completion() {
        let mut done = Task::new("done").unwrap();
        done.toggle();
        let tasks = vec![Task::new("open").unwrap(), done];

        let stats = TaskStats::compute(&tasks);
        assert_eq!(stats, TaskStats { remaining: 1, completed: 1 });
        assert_eq!(stats.remaining_label(), "1 task remaining");
        assert_eq!(stats.clear_label(), "Clear Completed (1)");
        assert!(stats.can_clear());
    }

    #[test]
    fn empty_collection_disables_clear() {
        let stats = TaskStats::compute(&[]);
        assert_eq!(stats.remaining_label(), "0 tasks remaining");
        assert!(!stats.can_clear());
    }
}
