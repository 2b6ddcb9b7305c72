//! Application errors

use thiserror::Error;
use web_kv::StorageError;

use crate::models::TaskId;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Task text was empty after trimming
    #[error("task text is empty")]
    EmptyText,
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}
