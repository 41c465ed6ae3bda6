//! Task list use-case service.
//!
//! # Responsibility
//! - Mediate between the in-memory state, the persistence store and the
//!   UI shell.
//! - Run the mutate -> persist -> re-render cycle for every UI event.
//!
//! # Invariants
//! - Every mutation is applied and persisted synchronously before returning.
//! - Operations against unknown ids are silent no-ops.
//! - Validation failures notify the user and change nothing.
//! - Destructive operations mutate only after the shell confirms.

use crate::config::ManagerConfig;
use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::service::state::TaskListState;
use crate::shell::{Notice, UiShell};
use crate::store::tasks::{load_tasks, save_tasks};
use crate::store::KeyValueStore;
use crate::view::stats::plural_task;
use crate::view::{Renderer, TaskStats, ViewError};
use log::{error, info};

pub const MSG_ENTER_TASK: &str = "Please enter a task";
pub const MSG_EMPTY_EDIT: &str = "Task cannot be empty";
pub const MSG_NOTHING_TO_CLEAR: &str = "No completed tasks to clear";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";

/// What a manager operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A task was added under this id.
    Created(TaskId),
    /// State changed as requested.
    Applied,
    /// Input was rejected; state unchanged.
    Invalid(TaskValidationError),
    /// The user declined the confirmation prompt.
    Declined,
    /// The id did not match any task.
    NotFound,
    /// `clear_completed` found nothing to clear.
    NothingToClear,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Applied)
    }
}

/// Owns the task list and drives its collaborators.
pub struct TaskListManager<S: KeyValueStore, U: UiShell> {
    state: TaskListState,
    store: S,
    shell: U,
    renderer: Renderer,
    config: ManagerConfig,
}

impl<S: KeyValueStore, U: UiShell> TaskListManager<S, U> {
    /// Restores the saved collection and presents the first frame.
    ///
    /// # Errors
    /// - Returns `ViewError` only when the bundled templates are unusable.
    pub fn open(store: S, shell: U, config: ManagerConfig) -> Result<Self, ViewError> {
        let renderer = Renderer::new(config.markup, config.max_edit_chars)?;
        let tasks = load_tasks(&store, &config.storage_key);
        info!(
            "event=task_list_open module=service status=ok count={}",
            tasks.len()
        );

        let mut manager = Self {
            state: TaskListState::new(tasks),
            store,
            shell,
            renderer,
            config,
        };
        manager.refresh();
        Ok(manager)
    }

    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn filter(&self) -> Filter {
        self.state.filter()
    }

    pub fn editing_id(&self) -> Option<&TaskId> {
        self.state.editing()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shell(&self) -> &U {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut U {
        &mut self.shell
    }

    /// Tasks visible under the current filter. Does not mutate state.
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.state.filtered_view()
    }

    /// Counts over the full collection.
    pub fn compute_stats(&self) -> TaskStats {
        self.state.stats()
    }

    /// Adds a task from raw input at the top of the list.
    pub fn add(&mut self, raw_text: &str) -> Outcome {
        let task = match Task::new(raw_text) {
            Ok(task) => task,
            Err(err) => {
                self.shell.notify(Notice::error(MSG_ENTER_TASK));
                return Outcome::Invalid(err);
            }
        };

        let id = task.id.clone();
        self.state.prepend(task);
        info!("event=task_add module=service status=ok id={id}");
        self.persist();
        self.refresh();
        self.shell.reset_add_input();
        self.shell.notify(Notice::success("Task added"));
        Outcome::Created(id)
    }

    pub fn toggle_completed(&mut self, id: &TaskId) -> Outcome {
        if !self.state.toggle(id) {
            return Outcome::NotFound;
        }
        info!("event=task_toggle module=service status=ok id={id}");
        self.persist();
        self.refresh();
        Outcome::Applied
    }

    /// Deletes one task after the user confirms.
    pub fn delete(&mut self, id: &TaskId) -> Outcome {
        if self.state.get(id).is_none() {
            return Outcome::NotFound;
        }
        if !self.shell.confirm(MSG_CONFIRM_DELETE) {
            return Outcome::Declined;
        }

        self.state.remove(id);
        info!("event=task_delete module=service status=ok id={id}");
        self.persist();
        self.refresh();
        self.shell.notify(Notice::success("Task deleted"));
        Outcome::Applied
    }

    pub fn begin_edit(&mut self, id: &TaskId) -> Outcome {
        if !self.state.begin_edit(id) {
            return Outcome::NotFound;
        }
        self.refresh();
        Outcome::Applied
    }

    /// Saves edited text; on blank input edit mode stays open.
    pub fn commit_edit(&mut self, id: &TaskId, new_text: &str) -> Outcome {
        match self
            .state
            .commit_edit(id, new_text, self.config.max_edit_chars)
        {
            Ok(true) => {
                info!("event=task_edit module=service status=ok id={id}");
                self.persist();
                self.refresh();
                Outcome::Applied
            }
            Ok(false) => Outcome::NotFound,
            Err(err) => {
                self.shell.notify(Notice::error(MSG_EMPTY_EDIT));
                Outcome::Invalid(err)
            }
        }
    }

    pub fn cancel_edit(&mut self) -> Outcome {
        self.state.cancel_edit();
        self.refresh();
        Outcome::Applied
    }

    /// Switches the view filter. Session-only; never persisted.
    pub fn set_filter(&mut self, filter: Filter) -> Outcome {
        self.state.set_filter(filter);
        self.refresh();
        Outcome::Applied
    }

    /// Removes every completed task after the user confirms.
    pub fn clear_completed(&mut self) -> Outcome {
        let completed = self.state.stats().completed;
        if completed == 0 {
            self.shell.notify(Notice::error(MSG_NOTHING_TO_CLEAR));
            return Outcome::NothingToClear;
        }

        let prompt = format!("Clear {completed} completed {}?", plural_task(completed));
        if !self.shell.confirm(&prompt) {
            return Outcome::Declined;
        }

        let removed = self.state.clear_completed();
        info!("event=task_clear_completed module=service status=ok removed={removed}");
        self.persist();
        self.refresh();
        self.shell.notify(Notice::success(format!(
            "Cleared {removed} completed {}",
            plural_task(removed)
        )));
        Outcome::Applied
    }

    /// Presents the current state again without changing it.
    pub fn refresh(&mut self) {
        match self.renderer.render(
            self.state.tasks(),
            self.state.filter(),
            self.state.editing(),
        ) {
            Ok(frame) => {
                self.shell.present(&frame);
                if let Some(id) = &frame.editing {
                    self.shell.focus_edit_input(id);
                }
            }
            Err(err) => {
                error!("event=render module=service status=error error={err}");
            }
        }
    }

    fn persist(&self) {
        // Write failures keep the in-memory mutation; the next successful
        // save rewrites the whole collection.
        if let Err(err) = save_tasks(&self.store, &self.config.storage_key, self.state.tasks()) {
            error!("event=task_persist module=service status=error error={err}");
        }
    }
}
