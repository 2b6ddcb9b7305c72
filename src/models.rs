//! Frontend Models
//!
//! The task entity as rendered and persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable task identifier, assigned once at creation
pub type TaskId = Uuid;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// New, not completed task with a fresh id.
    /// `text` is expected to be trimmed and non-empty already.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }
}
