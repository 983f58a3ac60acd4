//! Application layer: the fake repository and queries over it
//!
//! Queries depend on the [`ContentLoader`] trait, not on [`FakeMaker`] directly.

pub mod error;
pub mod loader;
pub mod queries;
pub mod repository;
pub mod tree_view;

pub use error::{RepositoryError, RepositoryResult};
pub use loader::ContentLoader;
pub use repository::{FakeMaker, SubtreeIterator};
pub use tree_view::ContentTreeView;
