//! Error types for the Picklist core runtime.

use std::fmt;

/// Errors raised by the dispatch machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The task ID is unknown, or the task has already run or been cancelled.
    InvalidTask,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTask => write!(f, "Task is not pending"),
        }
    }
}

impl std::error::Error for CoreError {}
