//! Core use-case services.
//!
//! # Responsibility
//! - Hold the explicit application state object.
//! - Orchestrate state, persistence and UI shell into use-case level APIs.

pub mod state;
pub mod task_list;
