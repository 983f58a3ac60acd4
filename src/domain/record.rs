//! Materialized content as stored by a repository after ingestion.

use chrono::{DateTime, Utc};

use crate::domain::publish::{PublishWindow, PublishedStatus};
use crate::domain::reference::ContentReference;

/// Frozen snapshot of one ingested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    pub content_link: ContentReference,
    pub name: String,
    /// `None` for the root of an ingested tree
    pub parent_link: Option<ContentReference>,
    /// Direct children in declaration order
    pub children: Vec<ContentReference>,
    pub publish_window: PublishWindow,
    pub visible_in_menu: bool,
}

impl ContentRecord {
    pub fn published_status(&self, as_of: DateTime<Utc>) -> PublishedStatus {
        self.publish_window.status_at(as_of)
    }

    pub fn is_published(&self, as_of: DateTime<Utc>) -> bool {
        self.published_status(as_of) == PublishedStatus::Published
    }

    pub fn is_root(&self) -> bool {
        self.parent_link.is_none()
    }
}
