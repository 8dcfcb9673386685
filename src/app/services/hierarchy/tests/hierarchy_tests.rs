//! Tests for hierarchy insertion, queries and removal

use super::super::{AqdefHierarchy, HierarchyEntry, HierarchyIndex};
use super::hierarchy_of;
use crate::app::models::{CharacteristicIndex, GroupIndex, KKey, NodeIndex, PartIndex};

/// part 1 -> group 1 -> characteristic 1 -> characteristic 2 (leaf)
///                   \-> characteristic 3 (leaf)
fn sample() -> AqdefHierarchy {
    hierarchy_of(&[
        ("K5111", 1, 1),
        ("K5113", 2, 1),
        ("K5112", 3, 1),
        ("K5103", 1, 2),
        ("K5103", 2, 3),
        ("K5102", 2, 3),
        ("K5102", 3, 2),
    ])
}

#[test]
fn test_full_entries_are_stored() {
    let hierarchy = sample();

    assert!(hierarchy.contains_hierarchy_information());
    assert!(!hierarchy.contains_simple_hierarchy_information());
    assert_eq!(hierarchy.node_definition_count(), 3);
    assert_eq!(hierarchy.node_binding_count(), 4);
    assert!(!hierarchy.is_empty());
}

#[test]
fn test_simple_entries_are_translated() {
    let hierarchy = hierarchy_of(&[("K2030", 1, 10), ("K2031", 2, 10)]);

    assert!(hierarchy.contains_simple_hierarchy_information());
    let definition = hierarchy.node_definitions().next().unwrap();
    assert!(definition.is_characteristic_node());
    assert_eq!(definition.index(), NodeIndex(10));
    assert_eq!(definition.value(), 1);

    let binding = hierarchy.node_bindings().next().unwrap();
    assert!(binding.is_characteristic_binding());
    assert_eq!(binding.index(), NodeIndex(10));
    assert_eq!(binding.value(), 2);
}

#[test]
fn test_simple_entry_with_zero_value_is_ignored() {
    let hierarchy = hierarchy_of(&[("K2030", 1, 0), ("K2031", 2, 0)]);

    assert!(hierarchy.is_empty());
    assert!(!hierarchy.contains_simple_hierarchy_information());
}

#[test]
fn test_mixing_encodings_is_rejected() {
    let mut full = hierarchy_of(&[("K5112", 1, 1)]);
    let error = full.put_entry(&KKey::of("K2031"), 2, 1).unwrap_err();
    assert!(error.is_invalid_structure());

    let mut simple = hierarchy_of(&[("K2030", 1, 10)]);
    let error = simple.put_entry(&KKey::of("K5112"), 1, 1).unwrap_err();
    assert!(error.is_invalid_structure());
}

#[test]
fn test_unsupported_entries_are_rejected() {
    let mut hierarchy = AqdefHierarchy::new();
    let entry = HierarchyEntry::new(KKey::of("K2030"), NodeIndex(1), 1);
    // K2030 is not a K51xx key
    assert!(entry.is_err());

    assert!(hierarchy.put_entry(&KKey::of("K5101"), 1, 1).is_err());
}

#[test]
fn test_parent_of_characteristic() {
    let hierarchy = sample();

    assert_eq!(
        hierarchy.parent_index_of_characteristic(CharacteristicIndex::new(1, 1)),
        Some(HierarchyIndex::Group(GroupIndex::new(1, 1)))
    );
    assert_eq!(
        hierarchy.parent_index_of_characteristic(CharacteristicIndex::new(1, 2)),
        Some(HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 1)))
    );
    assert_eq!(
        hierarchy.parent_index_of_characteristic(CharacteristicIndex::new(1, 3)),
        Some(HierarchyIndex::Group(GroupIndex::new(1, 1)))
    );
    assert_eq!(
        hierarchy.parent_index_of_characteristic(CharacteristicIndex::new(1, 9)),
        None
    );
}

#[test]
fn test_parent_of_group_bound_to_part_is_none() {
    let hierarchy = sample();

    assert_eq!(hierarchy.parent_index_of_group(GroupIndex::new(1, 1)), None);
}

#[test]
fn test_children_list_characteristics_before_groups() {
    let hierarchy = hierarchy_of(&[
        ("K5112", 1, 5),
        ("K5113", 2, 1),
        ("K5102", 1, 7),
        ("K5103", 1, 2),
        ("K5102", 1, 6),
    ]);

    assert_eq!(
        hierarchy.child_indexes_of_characteristic(CharacteristicIndex::new(1, 5)),
        vec![
            HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 6)),
            HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 7)),
            HierarchyIndex::Group(GroupIndex::new(1, 1)),
        ]
    );
    assert!(hierarchy.has_children(CharacteristicIndex::new(1, 5)));
    assert!(!hierarchy.has_children(CharacteristicIndex::new(1, 6)));
}

#[test]
fn test_children_of_group() {
    let hierarchy = sample();

    assert_eq!(
        hierarchy.child_indexes_of_group(GroupIndex::new(1, 1)),
        vec![
            HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 1)),
            HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 3)),
        ]
    );
}

#[test]
fn test_remove_characteristic_removes_subtree_and_parent_binding() {
    let mut hierarchy = sample();

    hierarchy.remove_hierarchy_for_characteristic(CharacteristicIndex::new(1, 1));

    assert_eq!(hierarchy.node_definition_count(), 2);
    assert!(hierarchy.node_bindings().all(|binding| !(binding.is_node_binding() && binding.value() == 3)));
    assert!(hierarchy.node_bindings().all(|binding| binding.index() != NodeIndex(3)));
    assert_eq!(hierarchy.node_binding_count(), 2);
}

#[test]
fn test_remove_leaf_characteristic_removes_binding() {
    let mut hierarchy = sample();

    hierarchy.remove_hierarchy_for_characteristic(CharacteristicIndex::new(1, 3));

    assert_eq!(hierarchy.node_definition_count(), 3);
    assert_eq!(hierarchy.node_binding_count(), 3);
    assert_eq!(
        hierarchy.child_indexes_of_group(GroupIndex::new(1, 1)),
        vec![HierarchyIndex::Characteristic(CharacteristicIndex::new(1, 1))]
    );
}

#[test]
fn test_remove_part_clears_tree() {
    let mut hierarchy = sample();

    hierarchy.remove_hierarchy_for_part(PartIndex(1));

    assert!(hierarchy.is_empty());
}

#[test]
fn test_remove_group_keeps_part_node() {
    let mut hierarchy = sample();

    hierarchy.remove_hierarchy_for_group(GroupIndex::new(1, 1));

    assert_eq!(hierarchy.node_definition_count(), 1);
    assert!(hierarchy.node_definitions().next().unwrap().is_part_node());
    assert_eq!(hierarchy.node_binding_count(), 0);
}

#[test]
fn test_equality_ignores_mode_flags() {
    let mut first = AqdefHierarchy::new();
    first
        .put_hierarchy_entry(HierarchyEntry::new(KKey::of("K5112"), NodeIndex(1), 1).unwrap())
        .unwrap();

    assert_eq!(first, hierarchy_of(&[("K5112", 1, 1)]));
    assert_ne!(first, AqdefHierarchy::new());
}
