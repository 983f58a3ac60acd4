//! In-memory content repository backed by a generational arena.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::application::{ContentLoader, RepositoryError, RepositoryResult};
use crate::config::Settings;
use crate::domain::{ContentRecord, ContentReference, FakePage, ValidationError};

/// Fake content repository.
///
/// Page trees are added once via [`add_to_repository`](Self::add_to_repository), which
/// assigns references in preorder (parent before children, siblings in declaration
/// order) and freezes the tree. Afterwards the repository is only read through
/// [`ContentLoader`].
#[derive(Debug)]
pub struct FakeMaker {
    /// Arena storage for all ingested records
    arena: Arena<ContentRecord>,
    /// Reference to arena slot lookup
    links: HashMap<ContentReference, Index>,
    /// Roots of ingested trees, in ingestion order
    roots: Vec<ContentReference>,
    next_id: u64,
}

impl Default for FakeMaker {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeMaker {
    pub fn new() -> Self {
        Self::starting_at(Settings::default().start_id)
    }

    /// Create a repository honoring the configured first reference id.
    pub fn with_settings(settings: &Settings) -> RepositoryResult<Self> {
        settings.validate()?;
        Ok(Self::starting_at(settings.start_id))
    }

    fn starting_at(start_id: u64) -> Self {
        Self {
            arena: Arena::new(),
            links: HashMap::new(),
            roots: Vec::new(),
            next_id: start_id,
        }
    }

    /// Ingest the page tree rooted at `root` and return the root's reference.
    ///
    /// All or nothing: the whole tree is checked before any reference is assigned.
    /// Fails if `root` declares a parent, if any page of the tree was already
    /// added to a repository, or if the tree's ids would run past `u64::MAX`.
    #[instrument(level = "debug", skip(self, root), fields(root = %root.name()))]
    pub fn add_to_repository(&mut self, root: &FakePage) -> RepositoryResult<ContentReference> {
        if let Some(parent) = root.parent() {
            return Err(ValidationError::NotARoot {
                page: root.name(),
                parent: parent.name(),
            }
            .into());
        }
        let pages = collect_preorder(root)?;
        let next_id = u64::try_from(pages.len())
            .ok()
            .and_then(|count| self.next_id.checked_add(count))
            .ok_or(RepositoryError::IdsExhausted {
                next_id: self.next_id,
                pages: pages.len(),
            })?;

        let mut assigned: Vec<ContentReference> = Vec::with_capacity(pages.len());
        for (position, (page, parent_position)) in pages.iter().enumerate() {
            let link = ContentReference::new(self.next_id + position as u64);
            let draft = page.draft();
            self.insert_record(ContentRecord {
                content_link: link,
                name: draft.name.clone(),
                parent_link: parent_position.map(|p| assigned[p]),
                children: Vec::new(),
                publish_window: draft.publish_window,
                visible_in_menu: draft.visible_in_menu,
            });
            assigned.push(link);
        }
        for ((page, _), link) in pages.iter().zip(&assigned) {
            page.assign_link(*link);
        }

        self.next_id = next_id;
        let root_link = assigned[0];
        self.roots.push(root_link);
        debug!("ingested {} pages under {}", pages.len(), root_link);
        Ok(root_link)
    }

    fn insert_record(&mut self, record: ContentRecord) -> Index {
        let link = record.content_link;
        let parent_link = record.parent_link;
        let idx = self.arena.insert(record);
        self.links.insert(link, idx);

        if let Some(parent_idx) = parent_link.and_then(|p| self.links.get(&p).copied()) {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(link);
            }
        }
        trace!("inserted {} under {:?}", link, parent_link);
        idx
    }

    fn record(&self, link: ContentReference) -> Option<&ContentRecord> {
        self.links.get(&link).and_then(|&idx| self.arena.get(idx))
    }

    /// Roots of all ingested trees, in ingestion order.
    pub fn roots(&self) -> &[ContentReference] {
        &self.roots
    }

    pub fn contains(&self, link: ContentReference) -> bool {
        self.links.contains_key(&link)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Preorder walk over `root` and its descendants.
    pub fn iter_subtree(&self, root: ContentReference) -> SubtreeIterator<'_> {
        SubtreeIterator::new(self, root)
    }
}

/// Walk the declared tree in preorder, pairing each page with its parent's position.
fn collect_preorder(root: &FakePage) -> RepositoryResult<Vec<(FakePage, Option<usize>)>> {
    let mut pages = Vec::new();
    let mut stack = vec![(root.clone(), None)];

    while let Some((page, parent_position)) = stack.pop() {
        if let Some(link) = page.content_link() {
            return Err(RepositoryError::DuplicateInsertion {
                page: page.name(),
                link,
            });
        }
        let position = pages.len();
        // Push children in reverse order for left-to-right traversal
        for child in page.children().into_iter().rev() {
            stack.push((child, Some(position)));
        }
        pages.push((page, parent_position));
    }
    Ok(pages)
}

impl ContentLoader for FakeMaker {
    #[instrument(level = "trace", skip(self))]
    fn get(&self, link: ContentReference) -> RepositoryResult<&ContentRecord> {
        self.record(link).ok_or(RepositoryError::NotFound(link))
    }

    #[instrument(level = "trace", skip(self))]
    fn get_children(&self, link: ContentReference) -> Vec<&ContentRecord> {
        self.record(link)
            .map(|parent| {
                parent
                    .children
                    .iter()
                    .filter_map(|&child| self.record(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_descendants(&self, link: ContentReference) -> Vec<ContentReference> {
        self.iter_subtree(link)
            .skip(1)
            .map(|record| record.content_link)
            .collect()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_ancestors(&self, link: ContentReference) -> Vec<ContentReference> {
        let first = self.record(link).and_then(|record| record.parent_link);
        std::iter::successors(first, |&parent| {
            self.record(parent).and_then(|record| record.parent_link)
        })
        .collect()
    }
}

/// Preorder iterator over an ingested subtree, root first.
pub struct SubtreeIterator<'a> {
    repository: &'a FakeMaker,
    stack: Vec<ContentReference>,
}

impl<'a> SubtreeIterator<'a> {
    fn new(repository: &'a FakeMaker, root: ContentReference) -> Self {
        Self {
            repository,
            stack: vec![root],
        }
    }
}

impl<'a> Iterator for SubtreeIterator<'a> {
    type Item = &'a ContentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let record = self.repository.record(current)?;
        for &child in record.children.iter().rev() {
            self.stack.push(child);
        }
        Some(record)
    }
}
