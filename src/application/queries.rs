//! Page queries composed from the read-only [`ContentLoader`] surface.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::application::{ContentLoader, RepositoryResult};
use crate::domain::{ContentRecord, ContentReference, PublishedStatus};

pub fn children_of<L>(root: ContentReference, loader: &L) -> Vec<&ContentRecord>
where
    L: ContentLoader + ?Sized,
{
    loader.get_children(root)
}

pub fn descendants_of<L>(root: ContentReference, loader: &L) -> Vec<ContentReference>
where
    L: ContentLoader + ?Sized,
{
    loader.get_descendants(root)
}

/// Descendants of `root` that are published at `as_of`, in descendant order.
pub fn all_published_pages<L>(
    root: ContentReference,
    loader: &L,
    as_of: DateTime<Utc>,
) -> RepositoryResult<Vec<&ContentRecord>>
where
    L: ContentLoader + ?Sized,
{
    let mut published = Vec::new();
    for link in descendants_of(root, loader) {
        let record = loader.get(link)?;
        if loader.get_published_status(record, as_of) == PublishedStatus::Published {
            published.push(record);
        }
    }
    debug!("{} published pages below {}", published.len(), root);
    Ok(published)
}

/// Direct children of `root` that are visible in menus, in declaration order.
pub fn menu_of<L>(root: ContentReference, loader: &L) -> Vec<&ContentRecord>
where
    L: ContentLoader + ?Sized,
{
    children_of(root, loader)
        .into_iter()
        .filter(|record| record.visible_in_menu)
        .collect()
}
