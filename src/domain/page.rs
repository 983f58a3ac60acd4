//! Fluent builder for declaring page trees before they are added to a repository.
//!
//! Pages only ever declare their parent. The parent keeps the declared children in
//! declaration order, so handing the root to
//! [`FakeMaker::add_to_repository`](crate::application::FakeMaker::add_to_repository)
//! reaches every page of the tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::domain::error::ValidationError;
use crate::domain::publish::PublishWindow;
use crate::domain::reference::ContentReference;

type PageRef = Rc<RefCell<PageDraft>>;
type WeakPageRef = Weak<RefCell<PageDraft>>;

#[derive(Debug)]
pub(crate) struct PageDraft {
    pub(crate) name: String,
    pub(crate) parent: Option<WeakPageRef>,
    pub(crate) children: Vec<FakePage>,
    pub(crate) publish_window: PublishWindow,
    pub(crate) visible_in_menu: bool,
    pub(crate) content_link: Option<ContentReference>,
}

/// Handle to a page under construction.
///
/// Cloning yields another handle to the same page. Parents own their children;
/// children hold a weak link back to their parent.
#[derive(Clone)]
pub struct FakePage {
    inner: PageRef,
}

impl FakePage {
    /// Create a detached page, visible in menus and never published.
    pub fn create(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            inner: Rc::new(RefCell::new(PageDraft {
                name,
                parent: None,
                children: Vec::new(),
                publish_window: PublishWindow::unpublished(),
                visible_in_menu: true,
                content_link: None,
            })),
        })
    }

    /// Declare `parent` as this page's parent.
    ///
    /// Declaring the same parent again is a no-op. A page keeps its first parent:
    /// declaring a different one fails with [`ValidationError::ConflictingParent`].
    pub fn is_child_of(self, parent: &FakePage) -> Result<Self, ValidationError> {
        if self.is_ingested() {
            return Err(ValidationError::AlreadyIngested { page: self.name() });
        }
        if parent.is_ingested() {
            return Err(ValidationError::AlreadyIngested {
                page: parent.name(),
            });
        }
        if let Some(current) = self.parent() {
            if current.same_page(parent) {
                return Ok(self);
            }
            return Err(ValidationError::ConflictingParent {
                page: self.name(),
                current: current.name(),
                requested: parent.name(),
            });
        }
        if parent.ancestors_and_self().any(|p| p.same_page(&self)) {
            return Err(ValidationError::ParentCycle {
                page: self.name(),
                parent: parent.name(),
            });
        }

        trace!("'{}' <- '{}'", parent.name(), self.name());
        self.inner.borrow_mut().parent = Some(Rc::downgrade(&parent.inner));
        parent.inner.borrow_mut().children.push(self.clone());
        Ok(self)
    }

    /// Publish from `start`, until `end` (inclusive) or indefinitely.
    pub fn published_on(
        self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        let window = PublishWindow::new(start, end).ok_or_else(|| {
            ValidationError::InvalidPublishWindow {
                page: self.name(),
                start,
                // new() only rejects when an end is given
                end: end.unwrap_or(start),
            }
        })?;
        self.inner.borrow_mut().publish_window = window;
        Ok(self)
    }

    pub fn is_visible_in_menu(self) -> Self {
        self.inner.borrow_mut().visible_in_menu = true;
        self
    }

    pub fn is_hidden_from_menu(self) -> Self {
        self.inner.borrow_mut().visible_in_menu = false;
        self
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Declared parent, if it is still alive.
    pub fn parent(&self) -> Option<FakePage> {
        self.inner
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| FakePage { inner })
    }

    /// Declared children in declaration order.
    pub fn children(&self) -> Vec<FakePage> {
        self.inner.borrow().children.clone()
    }

    pub fn publish_window(&self) -> PublishWindow {
        self.inner.borrow().publish_window
    }

    pub fn visible_in_menu(&self) -> bool {
        self.inner.borrow().visible_in_menu
    }

    /// Reference assigned when the page was added to a repository.
    pub fn content_link(&self) -> Option<ContentReference> {
        self.inner.borrow().content_link
    }

    pub fn is_ingested(&self) -> bool {
        self.content_link().is_some()
    }

    /// Whether both handles point to the same page.
    pub fn same_page(&self, other: &FakePage) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn draft(&self) -> std::cell::Ref<'_, PageDraft> {
        self.inner.borrow()
    }

    pub(crate) fn assign_link(&self, link: ContentReference) {
        self.inner.borrow_mut().content_link = Some(link);
    }

    fn ancestors_and_self(&self) -> impl Iterator<Item = FakePage> {
        std::iter::successors(Some(self.clone()), FakePage::parent)
    }
}

impl fmt::Debug for FakePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.inner.borrow();
        f.debug_struct("FakePage")
            .field("name", &draft.name)
            .field("children", &draft.children.len())
            .field("content_link", &draft.content_link)
            .finish()
    }
}
