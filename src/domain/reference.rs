//! Content references: identifiers handed out by a repository on ingestion.

use std::fmt;

/// Opaque identifier of an ingested page.
///
/// Assigned by [`FakeMaker`](crate::application::FakeMaker) in preorder, unique within one
/// repository and stable for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentReference {
    id: u64,
}

impl ContentReference {
    /// Id reserved for "no content", never assigned to a page.
    pub const EMPTY_ID: u64 = 0;

    pub(crate) fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
