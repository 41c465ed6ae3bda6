//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record and its validation rules.
//! - Define view filters as pure predicates over the collection.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal from the collection.

pub mod filter;
pub mod task;
