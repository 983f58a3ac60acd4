//! Publish windows and the published status derived from them.

use chrono::{DateTime, Utc};

/// Outcome of a published-status check at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishedStatus {
    Published,
    NotPublished,
}

/// Closed interval `[start, end]` during which a page is published.
///
/// - no `start`: never published
/// - `start` without `end`: published indefinitely from `start`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishWindow {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl PublishWindow {
    /// Window that is never published.
    pub fn unpublished() -> Self {
        Self::default()
    }

    /// Returns `None` if both bounds are given and `start > end`.
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Option<Self> {
        match end {
            Some(end) if start > end => None,
            _ => Some(Self {
                start: Some(start),
                end,
            }),
        }
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn status_at(&self, as_of: DateTime<Utc>) -> PublishedStatus {
        let Some(start) = self.start else {
            return PublishedStatus::NotPublished;
        };
        let open = start <= as_of && self.end.map_or(true, |end| as_of <= end);
        if open {
            PublishedStatus::Published
        } else {
            PublishedStatus::NotPublished
        }
    }
}
