//! Results of user actions that never reach storage.
//!
//! A validation failure is a normal result of a user action, not a fault:
//! the controller reports it as [`Outcome::Rejected`] and leaves the store
//! and session untouched. Storage faults travel separately as `anyhow::Error`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("List Name Cannot Be Empty.")]
    EmptyListName,
    #[error("A list named '{0}' already exists.")]
    DuplicateListName(String),
    #[error("Field is Empty.")]
    EmptyTaskTitle,
    #[error("No List Selected.")]
    NoListSelected,
    #[error("No Task Selected. Cannot Delete.")]
    NoTaskChecked,
    #[error("List '{0}' not found.")]
    UnknownList(String),
    #[error("Task with ID {0} is not in the current list.")]
    UnknownTask(i64),
}

/// What became of a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The user declined the confirmation prompt.
    Cancelled,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Outcome::Rejected(rejection)
    }
}
