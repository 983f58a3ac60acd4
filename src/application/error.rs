//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{ContentReference, ValidationError};

/// Repository errors wrap builder validation errors and add ingestion and lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("page '{page}' was already added to a repository as {link}")]
    DuplicateInsertion {
        page: String,
        link: ContentReference,
    },

    #[error("reference ids exhausted: cannot assign {pages} ids starting at {next_id}")]
    IdsExhausted { next_id: u64, pages: usize },

    #[error("content not found: {0}")]
    NotFound(ContentReference),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
