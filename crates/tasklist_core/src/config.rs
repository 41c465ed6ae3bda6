//! Manager configuration.

use crate::store::tasks::DEFAULT_STORAGE_KEY;
use crate::view::Markup;

/// Longest task text accepted by an edit, in characters.
pub const DEFAULT_MAX_EDIT_CHARS: usize = 100;

/// Tunables for `TaskListManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Store key the whole collection is saved under.
    pub storage_key: String,
    pub max_edit_chars: usize,
    pub markup: Markup,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_edit_chars: DEFAULT_MAX_EDIT_CHARS,
            markup: Markup::Html,
        }
    }
}

impl ManagerConfig {
    /// Default config rendering plain-text rows.
    pub fn text() -> Self {
        Self {
            markup: Markup::Text,
            ..Self::default()
        }
    }
}
