//! In-memory application state of the task list.
//!
//! # Responsibility
//! - Own the collection, the active filter and the editing id.
//! - Apply mutations without any persistence or UI side effects.
//!
//! # Invariants
//! - New tasks are prepended (newest first).
//! - At most one task is in edit mode.
//! - The editing id never outlives the task it points at.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::view::TaskStats;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    tasks: Vec<Task>,
    filter: Filter,
    editing: Option<TaskId>,
}

impl TaskListState {
    /// Starts from a restored collection with the default filter.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    pub fn filtered_view(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::compute(&self.tasks)
    }

    pub fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Flips completion; returns `false` when `id` is unknown.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Removes one task, leaving edit mode if it was being edited.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| &task.id == id)?;
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        Some(self.tasks.remove(index))
    }

    /// Enters edit mode for `id`; returns `false` when `id` is unknown.
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.editing = Some(id.clone());
        true
    }

    /// Applies edited text and leaves edit mode.
    ///
    /// Returns `Ok(false)` for an unknown id. On validation failure nothing
    /// changes, edit mode included.
    pub fn commit_edit(
        &mut self,
        id: &TaskId,
        raw_text: &str,
        max_chars: usize,
    ) -> Result<bool, TaskValidationError> {
        let Some(task) = self.get_mut(id) else {
            return Ok(false);
        };
        task.set_text(raw_text, max_chars)?;
        self.editing = None;
        Ok(true)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Drops every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        if let Some(editing) = &self.editing {
            if !self.tasks.iter().any(|task| &task.id == editing) {
                self.editing = None;
            }
        }
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskListState;
    use crate::model::filter::Filter;
    use crate::model::task::{Task, TaskId, TaskValidationError};

    fn state_with(texts: &[&str]) -> TaskListState {
        let mut state = TaskListState::default();
        for text in texts {
            state.prepend(Task::new(text).unwrap());
        }
        state
    }

    #[test]
    fn prepend_keeps_newest_first() {
        let state = state_with(&["first", "second"]);
        let texts: Vec<&str> = state.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn filtered_view_partitions_by_completion() {
        let mut state = state_with(&["a", "b", "c"]);
        let done = state.tasks()[1].id.clone();
        state.toggle(&done);

        state.set_filter(Filter::Active);
        assert!(state.filtered_view().iter().all(|task| !task.completed));
        assert_eq!(state.filtered_view().len(), 2);

        state.set_filter(Filter::Completed);
        assert!(state.filtered_view().iter().all(|task| task.completed));
        assert_eq!(state.filtered_view().len(), 1);

        state.set_filter(Filter::All);
        let all: Vec<&Task> = state.tasks().iter().collect();
        assert_eq!(state.filtered_view(), all);
    }

    #[test]
    fn only_one_task_is_edited_at_a_time() {
        let mut state = state_with(&["a", "b"]);
        let first = state.tasks()[0].id.clone();
        let second = state.tasks()[1].id.clone();

        assert!(state.begin_edit(&first));
        assert!(state.begin_edit(&second));
        assert_eq!(state.editing(), Some(&second));
        assert!(!state.begin_edit(&TaskId::from("missing")));
        assert_eq!(state.editing(), Some(&second));
    }

    #[test]
    fn failed_commit_keeps_edit_mode() {
        let mut state = state_with(&["keep me"]);
        let id = state.tasks()[0].id.clone();
        state.begin_edit(&id);

        let err = state.commit_edit(&id, "  ", 100).unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyText);
        assert_eq!(state.editing(), Some(&id));
        assert_eq!(state.tasks()[0].text, "keep me");
    }

    #[test]
    fn removing_edited_task_leaves_edit_mode() {
        let mut state = state_with(&["a"]);
        let id = state.tasks()[0].id.clone();
        state.begin_edit(&id);

        assert!(state.remove(&id).is_some());
        assert_eq!(state.editing(), None);
        assert!(state.remove(&id).is_none());
    }

    #[test]
    fn clear_completed_reports_removed_count() {
        let mut state = state_with(&["a", "b", "c"]);
        let ids: Vec<TaskId> = state.tasks().iter().map(|t| t.id.clone()).collect();
        state.toggle(&ids[0]);
        state.toggle(&ids[2]);
        state.begin_edit(&ids[2]);

        assert_eq!(state.clear_completed(), 2);
        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.editing(), None);
        assert_eq!(state.clear_completed(), 0);
    }
}
