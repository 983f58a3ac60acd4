/*
Render ingested page trees with termtree, e.g. to print a failing fixture:

root
├── Start
│   └── About us
└── Contact
 */
use termtree::Tree;
use tracing::instrument;

use crate::application::{ContentLoader, RepositoryResult};
use crate::domain::ContentReference;

pub trait ContentTreeView {
    fn to_tree_string(&self, root: ContentReference) -> RepositoryResult<Tree<String>>;
}

impl<L: ContentLoader + ?Sized> ContentTreeView for L {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: ContentReference) -> RepositoryResult<Tree<String>> {
        let record = self.get(root)?;
        let mut tree = Tree::new(record.name.clone());

        fn build_tree<L: ContentLoader + ?Sized>(
            loader: &L,
            link: ContentReference,
            parent_tree: &mut Tree<String>,
        ) {
            for child in loader.get_children(link) {
                let mut child_tree = Tree::new(child.name.clone());
                build_tree(loader, child.content_link, &mut child_tree);
                parent_tree.push(child_tree);
            }
        }

        build_tree(self, root, &mut tree);
        Ok(tree)
    }
}
