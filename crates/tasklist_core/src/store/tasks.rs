//! Task collection codec over a `KeyValueStore`.
//!
//! # Responsibility
//! - Serialize the whole collection as one JSON blob under a fixed key.
//! - Restore it at startup with a tolerant-read policy.
//!
//! # Invariants
//! - Reads never fail: absent, unreadable or malformed data loads as an
//!   empty collection and is logged, not surfaced.
//! - Writes never persist a task with blank text.

use super::{KeyValueStore, StoreResult};
use crate::model::task::{Task, TaskValidationError};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Why a stored blob was rejected.
#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    Invalid(TaskValidationError),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed task collection: {err}"),
            Self::Invalid(err) => write!(f, "invalid task collection: {err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

/// Encodes the collection in its stored form.
pub fn encode_tasks(tasks: &[Task]) -> StoreResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Decodes and validates a stored collection.
///
/// # Errors
/// - `Json` when the blob is not a JSON array of tasks.
/// - `Invalid` when a task has blank text or ids repeat.
pub fn decode_tasks(blob: &str) -> Result<Vec<Task>, DecodeError> {
    let tasks: Vec<Task> = serde_json::from_str(blob).map_err(DecodeError::Json)?;
    validate_collection(&tasks).map_err(DecodeError::Invalid)?;
    Ok(tasks)
}

/// Checks per-task invariants and id uniqueness.
pub fn validate_collection(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        task.validate()?;
        if !seen.insert(&task.id) {
            return Err(TaskValidationError::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}

/// Loads the collection stored under `key`.
///
/// Falls back to an empty collection on any failure.
pub fn load_tasks(store: &impl KeyValueStore, key: &str) -> Vec<Task> {
    let blob = match store.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("event=tasks_load module=store status=empty key={key}");
            return Vec::new();
        }
        Err(err) => {
            warn!("event=tasks_load module=store status=error error_code=store_read_failed key={key} error={err}");
            return Vec::new();
        }
    };

    match decode_tasks(&blob) {
        Ok(tasks) => {
            info!(
                "event=tasks_load module=store status=ok key={} count={}",
                key,
                tasks.len()
            );
            tasks
        }
        Err(err) => {
            warn!("event=tasks_load module=store status=error error_code=corrupt_data key={key} error={err}");
            Vec::new()
        }
    }
}

/// Replaces the collection stored under `key`.
pub fn save_tasks(store: &impl KeyValueStore, key: &str, tasks: &[Task]) -> StoreResult<()> {
    let blob = encode_tasks(tasks)?;
    match store.set(key, &blob) {
        Ok(()) => {
            debug!(
                "event=tasks_save module=store status=ok key={} count={}",
                key,
                tasks.len()
            );
            Ok(())
        }
        Err(err) => {
            error!("event=tasks_save module=store status=error key={key} error={err}");
            Err(err)
        }
    }
}
