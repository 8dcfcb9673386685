//! Tests for building a hierarchy from id-based parent links

use super::super::AqdefHierarchyBuilder;
use super::dump;

#[test]
fn test_builds_nodes_and_bindings() {
    let mut builder = AqdefHierarchyBuilder::new();
    builder.create_hierarchy_node_of_part(1, 1);
    builder.create_hierarchy_node_of_characteristic(2, 1, 1, 100, None);
    builder.create_hierarchy_node_of_characteristic(3, 1, 2, 200, Some(100));
    builder.create_hierarchy_node_of_group(4, 1, 1, 300, Some(0));
    builder.create_hierarchy_node_of_characteristic(5, 1, 3, 400, Some(300));

    let hierarchy = builder.build();

    assert_eq!(
        dump(&hierarchy),
        vec![
            "K5111/1 1",
            "K5112/2 1",
            "K5112/3 2",
            "K5113/4 1",
            "K5112/5 3",
            "K5103/1 2",
            "K5103/1 4",
            "K5102/2 2",
            "K5102/4 3",
        ]
    );
    assert!(hierarchy.contains_hierarchy_information());
}

#[test]
fn test_no_parent_links_produce_empty_hierarchy() {
    let mut builder = AqdefHierarchyBuilder::new();
    builder.create_hierarchy_node_of_part(1, 1);
    builder.create_hierarchy_node_of_characteristic(2, 1, 1, 100, None);
    builder.create_hierarchy_node_of_characteristic(3, 1, 2, 200, Some(0));

    assert!(builder.build().is_empty());
}

#[test]
fn test_unknown_parent_produces_empty_hierarchy() {
    let mut builder = AqdefHierarchyBuilder::new();
    builder.create_hierarchy_node_of_part(1, 1);
    builder.create_hierarchy_node_of_characteristic(2, 1, 1, 100, Some(999));

    assert!(builder.build().is_empty());
}

#[test]
fn test_unknown_part_produces_empty_hierarchy() {
    let mut builder = AqdefHierarchyBuilder::new();
    builder.create_hierarchy_node_of_group(2, 7, 1, 100, None);

    assert!(builder.build().is_empty());
}
