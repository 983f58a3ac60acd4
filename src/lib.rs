//! In-memory fake of a hierarchical content repository.
//!
//! Declare a page tree with [`FakePage`], add it to a [`FakeMaker`], then query it
//! through [`ContentLoader`] exactly like code under test queries a real repository:
//!
//! ```
//! use fakemaker::{queries, FakeMaker, FakePage};
//!
//! let root = FakePage::create("Root")?;
//! let start = FakePage::create("Start")?.is_child_of(&root)?;
//! FakePage::create("About us")?.is_child_of(&start)?;
//!
//! let mut fake = FakeMaker::new();
//! let root_link = fake.add_to_repository(&root)?;
//!
//! assert_eq!(queries::descendants_of(root_link, &fake).len(), 2);
//! # Ok::<(), fakemaker::RepositoryError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod util;

pub use application::{
    queries, ContentLoader, ContentTreeView, FakeMaker, RepositoryError, RepositoryResult,
};
pub use config::Settings;
pub use domain::{
    ContentRecord, ContentReference, FakePage, PublishWindow, PublishedStatus, ValidationError,
};
