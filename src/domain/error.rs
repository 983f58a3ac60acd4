//! Domain-level errors (no external dependencies)

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Malformed builder input, reported while a page tree is being declared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("page name must not be empty")]
    EmptyName,

    #[error("invalid publish window for '{page}': start {start} is after end {end}")]
    InvalidPublishWindow {
        page: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("'{page}' is already a child of '{current}', cannot move it under '{requested}'")]
    ConflictingParent {
        page: String,
        current: String,
        requested: String,
    },

    #[error("'{page}' cannot be a child of '{parent}': cycle in page hierarchy")]
    ParentCycle { page: String, parent: String },

    #[error("'{page}' is already in a repository, its tree is frozen")]
    AlreadyIngested { page: String },

    #[error("'{page}' is not a root, it is declared as child of '{parent}'")]
    NotARoot { page: String, parent: String },
}
