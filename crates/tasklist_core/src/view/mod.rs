//! List rendering.
//!
//! # Responsibility
//! - Map the filtered collection to list markup through Handlebars templates.
//! - Produce a `Frame` bundling markup with derived stats for the UI shell.
//!
//! # Invariants
//! - In `Markup::Html` every interpolated value goes through the engine's
//!   HTML escaping; templates never use triple-stash output.
//! - Rendering is a pure function of (tasks, filter, editing id).

pub mod stats;

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};
use handlebars::{Handlebars, RenderError, TemplateError};
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use stats::TaskStats;

const LIST_TEMPLATE: &str = "list";
const HTML_LIST_TEMPLATE: &str = include_str!("templates/list.html.hbs");
const TEXT_LIST_TEMPLATE: &str = include_str!("templates/list.txt.hbs");

/// Output flavour of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Escaped list markup for a browser-like host.
    Html,
    /// Numbered plain-text rows for a terminal.
    Text,
}

#[derive(Debug)]
pub enum ViewError {
    Template(Box<TemplateError>),
    Render(Box<RenderError>),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template(err) => write!(f, "invalid list template: {err}"),
            Self::Render(err) => write!(f, "failed to render list: {err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Template(err) => Some(err.as_ref()),
            Self::Render(err) => Some(err.as_ref()),
        }
    }
}

impl From<TemplateError> for ViewError {
    fn from(value: TemplateError) -> Self {
        Self::Template(Box::new(value))
    }
}

impl From<RenderError> for ViewError {
    fn from(value: RenderError) -> Self {
        Self::Render(Box::new(value))
    }
}

/// Filter-specific message shown when the filtered view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: &'static str,
    pub text: &'static str,
}

impl EmptyState {
    pub fn for_filter(filter: Filter) -> Self {
        match filter {
            Filter::All => Self {
                icon: "📝",
                text: "No tasks yet. Add your first task above!",
            },
            Filter::Active => Self {
                icon: "🎉",
                text: "All tasks completed! Great job!",
            },
            Filter::Completed => Self {
                icon: "📋",
                text: "No completed tasks yet",
            },
        }
    }
}

/// One rendered snapshot handed to the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub filter: Filter,
    /// Rendered list body (rows or the empty-state message).
    pub list: String,
    /// Ids of the visible rows, in display order.
    pub visible: Vec<TaskId>,
    pub stats: TaskStats,
    pub editing: Option<TaskId>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn status_text(&self) -> String {
        self.stats.remaining_label()
    }

    pub fn clear_label(&self) -> String {
        self.stats.clear_label()
    }

    pub fn clear_enabled(&self) -> bool {
        self.stats.can_clear()
    }
}

#[derive(Serialize)]
struct ListContext<'a> {
    empty: Option<EmptyState>,
    rows: Vec<RowContext<'a>>,
}

#[derive(Serialize)]
struct RowContext<'a> {
    position: usize,
    id: &'a str,
    text: &'a str,
    completed: bool,
    editing: bool,
    max_len: usize,
}

/// Template-backed list renderer.
pub struct Renderer {
    hbs: Handlebars<'static>,
    markup: Markup,
    max_edit_chars: usize,
}

impl Renderer {
    /// Builds a renderer with the built-in template for `markup`.
    ///
    /// # Errors
    /// - Returns `ViewError::Template` when the bundled template fails to parse.
    pub fn new(markup: Markup, max_edit_chars: usize) -> Result<Self, ViewError> {
        let mut hbs = Handlebars::new();
        let template = match markup {
            Markup::Html => HTML_LIST_TEMPLATE,
            Markup::Text => {
                hbs.register_escape_fn(handlebars::no_escape);
                TEXT_LIST_TEMPLATE
            }
        };
        hbs.register_template_string(LIST_TEMPLATE, template)?;
        Ok(Self {
            hbs,
            markup,
            max_edit_chars,
        })
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Renders the tasks visible under `filter`.
    ///
    /// The row matching `editing` renders as an edit row; all others render
    /// read-only.
    pub fn render(
        &self,
        tasks: &[Task],
        filter: Filter,
        editing: Option<&TaskId>,
    ) -> Result<Frame, ViewError> {
        let visible = filter.apply(tasks);
        let rows = visible
            .iter()
            .enumerate()
            .map(|(index, task)| RowContext {
                position: index + 1,
                id: task.id.as_str(),
                text: task.text.as_str(),
                completed: task.completed,
                editing: editing == Some(&task.id),
                max_len: self.max_edit_chars,
            })
            .collect::<Vec<_>>();
        let context = ListContext {
            empty: rows.is_empty().then(|| EmptyState::for_filter(filter)),
            rows,
        };

        let list = self.hbs.render(LIST_TEMPLATE, &context)?;
        debug!(
            "event=render module=view status=ok filter={} rows={}",
            filter,
            visible.len()
        );

        Ok(Frame {
            filter,
            list,
            visible: visible.iter().map(|task| task.id.clone()).collect(),
            stats: TaskStats::compute(tasks),
            editing: editing.cloned(),
        })
    }
}
