//! Tests for FakeMaker ingestion and the ContentLoader surface

use chrono::{Duration, Utc};
use rstest::{fixture, rstest};

use fakemaker::util::testing::init_test_setup;
use fakemaker::{
    ContentLoader, ContentReference, FakeMaker, FakePage, RepositoryError, ValidationError,
};

/// root
/// ├── my page
/// └── Start
///     ├── About us
///     └── Our services
struct SiteTree {
    root: FakePage,
    my_page: FakePage,
    start: FakePage,
    about_us: FakePage,
    our_services: FakePage,
}

#[fixture]
fn site() -> SiteTree {
    init_test_setup();
    let root = FakePage::create("root").unwrap();
    let my_page = FakePage::create("my page").unwrap().is_child_of(&root).unwrap();
    let start = FakePage::create("Start").unwrap().is_child_of(&root).unwrap();
    let about_us = FakePage::create("About us").unwrap().is_child_of(&start).unwrap();
    let our_services = FakePage::create("Our services")
        .unwrap()
        .is_child_of(&start)
        .unwrap();
    SiteTree {
        root,
        my_page,
        start,
        about_us,
        our_services,
    }
}

fn link(page: &FakePage) -> ContentReference {
    page.content_link().expect("page was ingested")
}

/// Build a tree where every node has `fan_out` children, `depth` levels deep.
fn build_uniform_tree(depth: usize, fan_out: usize) -> (FakePage, usize) {
    let root = FakePage::create("root").unwrap();
    let mut level = vec![root.clone()];
    let mut count = 1;
    for d in 1..depth {
        let mut next = Vec::new();
        for parent in &level {
            for i in 0..fan_out {
                let child = FakePage::create(format!("{}-{}", d, i))
                    .unwrap()
                    .is_child_of(parent)
                    .unwrap();
                next.push(child);
                count += 1;
            }
        }
        level = next;
    }
    (root, count)
}

// ============================================================
// Ingestion
// ============================================================

#[rstest]
fn given_tree_when_ingesting_then_references_assigned_in_preorder(site: SiteTree) {
    let mut fake = FakeMaker::new();

    let root_link = fake.add_to_repository(&site.root).unwrap();

    assert_eq!(root_link, link(&site.root));
    let ids: Vec<u64> = [
        &site.root,
        &site.my_page,
        &site.start,
        &site.about_us,
        &site.our_services,
    ]
    .iter()
    .map(|page| link(page).id())
    .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(fake.len(), 5);
    assert_eq!(fake.roots(), &[root_link]);
}

#[rstest]
fn given_tree_when_ingesting_then_records_mirror_builder(site: SiteTree) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();

    let start = fake.get(link(&site.start)).unwrap();

    assert_eq!(start.name, "Start");
    assert_eq!(start.parent_link, Some(link(&site.root)));
    assert_eq!(
        start.children,
        vec![link(&site.about_us), link(&site.our_services)]
    );
    assert!(start.visible_in_menu);
    assert!(fake.get(link(&site.root)).unwrap().is_root());
}

#[rstest]
fn given_ingested_root_when_ingesting_again_then_duplicate_insertion(site: SiteTree) {
    let mut fake = FakeMaker::new();
    let root_link = fake.add_to_repository(&site.root).unwrap();

    let err = fake.add_to_repository(&site.root).unwrap_err();

    assert_eq!(
        err,
        RepositoryError::DuplicateInsertion {
            page: "root".into(),
            link: root_link,
        }
    );
    assert_eq!(fake.len(), 5);
    assert_eq!(fake.roots().len(), 1);
}

#[rstest]
fn given_page_ingested_elsewhere_when_ingesting_then_duplicate_insertion(site: SiteTree) {
    let mut first = FakeMaker::new();
    let mut second = FakeMaker::new();
    first.add_to_repository(&site.root).unwrap();

    let err = second.add_to_repository(&site.root).unwrap_err();

    assert!(matches!(err, RepositoryError::DuplicateInsertion { .. }));
    assert!(second.is_empty());
}

#[rstest]
fn given_non_root_page_when_ingesting_then_nothing_is_added(site: SiteTree) {
    let mut fake = FakeMaker::new();

    let err = fake.add_to_repository(&site.start).unwrap_err();

    assert_eq!(
        err,
        RepositoryError::Validation(ValidationError::NotARoot {
            page: "Start".into(),
            parent: "root".into(),
        })
    );
    assert!(fake.is_empty());
    assert!(site.about_us.content_link().is_none());
}

#[test]
fn given_multiple_roots_when_ingesting_then_references_stay_unique() {
    let mut fake = FakeMaker::new();
    let (first, first_count) = build_uniform_tree(3, 2);
    let (second, second_count) = build_uniform_tree(2, 3);

    let first_link = fake.add_to_repository(&first).unwrap();
    let second_link = fake.add_to_repository(&second).unwrap();

    assert_ne!(first_link, second_link);
    assert_eq!(fake.len(), first_count + second_count);
    let mut all: Vec<_> = fake.get_descendants(first_link);
    all.extend(fake.get_descendants(second_link));
    all.push(first_link);
    all.push(second_link);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), first_count + second_count);
    assert_eq!(fake.roots(), &[first_link, second_link]);
}

#[rstest]
fn given_builder_edited_after_ingestion_when_reading_record_then_snapshot_unchanged(
    site: SiteTree,
) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();

    let _ = site
        .about_us
        .clone()
        .is_hidden_from_menu()
        .published_on(Utc::now(), None)
        .unwrap();

    let record = fake.get(link(&site.about_us)).unwrap();
    assert!(record.visible_in_menu);
    assert!(record.publish_window.start().is_none());
}

// ============================================================
// Queries
// ============================================================

#[rstest]
fn given_reference_from_larger_repository_when_getting_then_not_found(site: SiteTree) {
    let mut large = FakeMaker::new();
    large.add_to_repository(&site.root).unwrap();
    let mut small = FakeMaker::new();
    small
        .add_to_repository(&FakePage::create("single").unwrap())
        .unwrap();
    let foreign = link(&site.our_services);

    let err = small.get(foreign).unwrap_err();

    assert_eq!(err, RepositoryError::NotFound(foreign));
    assert!(!small.contains(foreign));
    assert!(large.contains(foreign));
}

#[rstest]
fn given_parent_when_getting_children_then_declaration_order(site: SiteTree) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();

    let names: Vec<_> = fake
        .get_children(link(&site.root))
        .into_iter()
        .map(|record| record.name.clone())
        .collect();

    assert_eq!(names, vec!["my page", "Start"]);
}

#[rstest]
fn given_leaf_or_unknown_reference_when_querying_tree_then_empty(site: SiteTree) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();
    let empty = FakeMaker::new();

    assert!(fake.get_children(link(&site.about_us)).is_empty());
    assert!(fake.get_descendants(link(&site.about_us)).is_empty());
    assert!(empty.get_children(link(&site.root)).is_empty());
    assert!(empty.get_descendants(link(&site.root)).is_empty());
    assert!(empty.get_ancestors(link(&site.about_us)).is_empty());
}

#[rstest]
fn given_every_declared_child_when_querying_parent_then_child_is_listed(site: SiteTree) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();

    for page in [&site.my_page, &site.start, &site.about_us, &site.our_services] {
        let parent = page.parent().unwrap();
        let children: Vec<_> = fake
            .get_children(link(&parent))
            .into_iter()
            .map(|record| record.content_link)
            .collect();
        assert!(children.contains(&link(page)), "{} missing", page.name());
    }
}

#[rstest]
#[case(1, 1)]
#[case(2, 1)]
#[case(5, 1)]
#[case(3, 3)]
#[case(4, 2)]
fn given_uniform_tree_when_getting_descendants_then_all_but_root(
    #[case] depth: usize,
    #[case] fan_out: usize,
) {
    let mut fake = FakeMaker::new();
    let (root, count) = build_uniform_tree(depth, fan_out);
    let root_link = fake.add_to_repository(&root).unwrap();

    let descendants = fake.get_descendants(root_link);

    assert_eq!(descendants.len(), count - 1);
    assert!(!descendants.contains(&root_link));
    let mut unique = descendants.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), descendants.len());
}

#[rstest]
fn given_tree_when_getting_descendants_then_preorder(site: SiteTree) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();

    let descendants = fake.get_descendants(link(&site.root));

    assert_eq!(
        descendants,
        vec![
            link(&site.my_page),
            link(&site.start),
            link(&site.about_us),
            link(&site.our_services),
        ]
    );
}

#[rstest]
fn given_leaf_when_getting_ancestors_then_nearest_first(site: SiteTree) {
    let mut fake = FakeMaker::new();
    fake.add_to_repository(&site.root).unwrap();

    let ancestors = fake.get_ancestors(link(&site.our_services));

    assert_eq!(ancestors, vec![link(&site.start), link(&site.root)]);
    assert!(fake.get_ancestors(link(&site.root)).is_empty());
}

#[rstest]
fn given_repeated_reads_when_querying_then_results_equal(site: SiteTree) {
    let mut fake = FakeMaker::new();
    let now = Utc::now();
    site.start
        .clone()
        .published_on(now - Duration::days(1), None)
        .unwrap();
    fake.add_to_repository(&site.root).unwrap();
    let root = link(&site.root);

    let children = fake.get_children(root);
    let descendants = fake.get_descendants(root);
    let record = fake.get(link(&site.start)).unwrap().clone();
    let status = fake.get_published_status(&record, now);

    for _ in 0..3 {
        assert_eq!(fake.get_children(root), children);
        assert_eq!(fake.get_descendants(root), descendants);
        assert_eq!(fake.get(link(&site.start)).unwrap(), &record);
        assert_eq!(fake.get_published_status(&record, now), status);
    }
    assert_eq!(fake.len(), 5);
}
