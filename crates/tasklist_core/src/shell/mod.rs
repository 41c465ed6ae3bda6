//! UI shell collaborator contract.
//!
//! # Responsibility
//! - Describe what the manager needs from its host: presenting frames,
//!   modal confirmation, transient notices and focus management.
//!
//! # Invariants
//! - `confirm` is modal: the manager waits for its answer before mutating.
//! - Notices are fire-and-forget; the shell decides how long they stay.

use crate::model::task::TaskId;
use crate::view::Frame;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// Transient, auto-dismissing message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }
}

/// Host environment the task list manager drives.
pub trait UiShell {
    /// Replaces the visible list, status readout and clear action state.
    fn present(&mut self, frame: &Frame);

    /// Asks a yes/no question for a destructive action.
    fn confirm(&mut self, message: &str) -> bool;

    fn notify(&mut self, notice: Notice);

    /// Clears the add input and gives it focus after a successful add.
    fn reset_add_input(&mut self) {}

    /// Focuses and selects the edit input of the task being edited.
    fn focus_edit_input(&mut self, _id: &TaskId) {}
}
