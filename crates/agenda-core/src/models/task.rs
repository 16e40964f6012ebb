//! Task model definition.

use serde::{Deserialize, Serialize};

/// A to-do item attached to one event.
///
/// Tasks have no identity of their own: the description is the match key for
/// removal and completion, so two tasks with the same description under one
/// event cannot be told apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// What needs doing
    pub description: String,

    /// Whether it has been done
    pub completed: bool,
}

impl Task {
    /// Creates an open task.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }
}
