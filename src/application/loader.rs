//! Read-only query surface of a content repository
//!
//! Helpers depend on this trait only, so they run unchanged against the fake
//! or any other implementation.

use chrono::{DateTime, Utc};

use crate::application::RepositoryResult;
use crate::domain::{ContentRecord, ContentReference, PublishedStatus};

/// Loads content and walks the page hierarchy.
pub trait ContentLoader {
    /// Fails with `NotFound` if `link` was never assigned by this repository.
    fn get(&self, link: ContentReference) -> RepositoryResult<&ContentRecord>;

    /// Direct children in declaration order; empty for leaves and unknown links.
    fn get_children(&self, link: ContentReference) -> Vec<&ContentRecord>;

    /// Every strict descendant exactly once; empty for leaves and unknown links.
    fn get_descendants(&self, link: ContentReference) -> Vec<ContentReference>;

    /// Parent chain up to the root, nearest first.
    fn get_ancestors(&self, link: ContentReference) -> Vec<ContentReference>;

    fn get_published_status(
        &self,
        record: &ContentRecord,
        as_of: DateTime<Utc>,
    ) -> PublishedStatus {
        record.published_status(as_of)
    }
}
