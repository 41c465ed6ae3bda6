//! Task domain model.
//!
//! # Responsibility
//! - Define the only persisted entity of the task list.
//! - Own text normalization and validation rules shared by add/edit paths.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused.
//! - `text` is trimmed and never empty once a `Task` exists.
//! - `created_at` is set once at creation and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Stored as a plain string so collections written by other tools (which may
/// use non-UUID ids) still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh id, practically unique within a collection.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
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

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation error for task text and collection shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Two tasks in one collection share an id.
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::DuplicateId(id) => write!(f, "duplicate task id `{id}`"),
        }
    }
}

impl Error for TaskValidationError {}

/// One user-entered item.
///
/// Serialized with camelCase field names; field order is part of the stored
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task from raw user input.
    ///
    /// # Errors
    /// - `EmptyText` when `raw_text` is blank after trimming.
    pub fn new(raw_text: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), raw_text, Utc::now())
    }

    /// Creates a task with caller-provided identity and timestamp.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: TaskId,
        raw_text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id,
            text: normalize_text(raw_text)?,
            completed: false,
            created_at,
        })
    }

    /// Replaces text with trimmed input, capped at `max_chars` characters.
    ///
    /// Leaves the task untouched on validation failure.
    pub fn set_text(&mut self, raw_text: &str, max_chars: usize) -> Result<(), TaskValidationError> {
        let text = normalize_text(raw_text)?;
        self.text = truncate_chars(&text, max_chars);
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Checks the invariants a persisted task must hold.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }
}

/// Trims raw input and rejects blank text.
pub fn normalize_text(raw_text: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        // Trailing whitespace exposed by the cut is trimmed again.
        Some((cut, _)) => value[..cut].trim_end().to_string(),
        None => value.to_string(),
    }
}
