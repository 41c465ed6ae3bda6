//! Core logic for the task list manager.
//! This crate owns the task collection and its invariants; hosts plug in a
//! persistence store and a UI shell.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod shell;
pub mod store;
pub mod view;

pub use config::{ManagerConfig, DEFAULT_MAX_EDIT_CHARS};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::filter::{Filter, UnknownFilter};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use service::state::TaskListState;
pub use service::task_list::{Outcome, TaskListManager};
pub use shell::{Notice, NoticeLevel, UiShell};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use view::{EmptyState, Frame, Markup, Renderer, TaskStats, ViewError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
